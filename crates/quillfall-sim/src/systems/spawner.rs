//! Spawner system — drains the wave queue, or runs the infinite swarm.

use hecs::World;
use quillfall_core::constants::*;
use quillfall_core::events::GameEvent;
use rand_chacha::ChaCha8Rng;

use crate::progression::ProgressionState;
use crate::scheduler::{self, WaveState};
use crate::world_setup;

/// Advance the spawn timer and spawn any due enemies.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    progression: &ProgressionState,
    next_enemy_id: &mut u32,
    now_secs: f32,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    if wave.infinite_swarm_active {
        wave.spawn_timer += dt;
        if wave.spawn_timer >= progression.swarm_spawn_interval {
            wave.spawn_timer = 0.0;
            let archetype = scheduler::draw_archetype(SWARM_EFFECTIVE_WAVE, rng);
            let (id, position) = world_setup::spawn_enemy(
                world,
                rng,
                next_enemy_id,
                archetype,
                SWARM_EFFECTIVE_WAVE,
                Some(progression.difficulty_multiplier),
                now_secs,
            );
            events.push(GameEvent::EnemySpawned {
                enemy_id: id,
                archetype,
                position,
            });
        }
        return;
    }

    if !wave.is_active || wave.spawn_queue.is_empty() {
        return;
    }

    wave.spawn_timer += dt;
    if wave.spawn_timer < wave.current_spawn_interval() {
        return;
    }
    wave.spawn_timer = 0.0;

    if let Some(archetype) = wave.spawn_queue.pop_front() {
        wave.spawned_count += 1;
        debug_assert!(wave.spawned_count <= wave.total_spawns);
        let (id, position) = world_setup::spawn_enemy(
            world,
            rng,
            next_enemy_id,
            archetype,
            wave.wave_number,
            None,
            now_secs,
        );
        events.push(GameEvent::EnemySpawned {
            enemy_id: id,
            archetype,
            position,
        });
    }
}
