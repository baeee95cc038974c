//! Kinematic integration system.
//!
//! Applies gravity to ground units, integrates position from velocity,
//! clamps to the arena, and lands anything that reaches the ground plane.

use hecs::World;
use quillfall_core::components::EnemyInfo;
use quillfall_core::constants::*;
use quillfall_core::types::{Position, Velocity};

/// Integrate one step of `dt` seconds for every enemy.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (info, pos, vel)) in
        world.query_mut::<(&EnemyInfo, &mut Position, &mut Velocity)>()
    {
        if !info.archetype.is_airborne() {
            vel.0.y += GRAVITY * dt;
        }

        pos.0 += vel.0 * dt;

        // Ground plane
        if !info.archetype.is_airborne() && pos.0.y >= GROUND_Y {
            pos.0.y = GROUND_Y;
            vel.0.y = 0.0;
        }

        // Arena bounds. Fresh ground spawns walk in from just outside, so
        // the horizontal clamp gets a small margin.
        pos.0.x = pos.0.x.clamp(-50.0, ARENA_WIDTH + 50.0);
        pos.0.y = pos.0.y.min(GROUND_Y).max(0.0);
    }
}
