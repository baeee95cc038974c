//! Cleanup system: removes enemies that died this tick.
//!
//! Death accounting (score, XP, splitter children, kill events) happens in
//! the damage path; this system only despawns the corpses. Uses a
//! pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};
use quillfall_core::components::BehaviorCtl;
use quillfall_core::enums::BehaviorState;

/// Despawn every entity whose behavior state is terminal.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, ctl) in world.query_mut::<&BehaviorCtl>() {
        if ctl.state == BehaviorState::Dead {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
