//! Entity spawn factories.
//!
//! Creates enemy entities with the full component bundle: identity, wave
//! scaled stats, kinematics, and behavior bookkeeping.

use glam::Vec2;
use hecs::World;
use quillfall_ai::profiles::{get_profile, scaled_stats};
use quillfall_core::components::*;
use quillfall_core::constants::*;
use quillfall_core::enums::EnemyArchetype;
use quillfall_core::types::{Position, Velocity};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Spawn one enemy at an arena edge, scaled for `wave`. Returns the new
/// entity's stable id and position for the spawn event.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    archetype: EnemyArchetype,
    wave: u32,
    swarm_multiplier: Option<f32>,
    now_secs: f32,
) -> (u32, Vec2) {
    let position = if archetype.is_airborne() {
        // Flyers drop in along the top of the arena
        Vec2::new(rng.gen_range(100.0..ARENA_WIDTH - 100.0), 120.0)
    } else {
        // Ground units walk in from a random side
        let x = if rng.gen_bool(0.5) {
            -40.0
        } else {
            ARENA_WIDTH + 40.0
        };
        Vec2::new(x, GROUND_Y)
    };

    spawn_enemy_at(
        world,
        next_enemy_id,
        archetype,
        position,
        Vec2::ZERO,
        wave,
        swarm_multiplier,
        now_secs,
    )
}

/// Spawn an enemy with explicit position and velocity.
#[allow(clippy::too_many_arguments)]
pub fn spawn_enemy_at(
    world: &mut World,
    next_enemy_id: &mut u32,
    archetype: EnemyArchetype,
    position: Vec2,
    velocity: Vec2,
    wave: u32,
    swarm_multiplier: Option<f32>,
    now_secs: f32,
) -> (u32, Vec2) {
    let profile = get_profile(archetype);
    let stats = scaled_stats(&profile, wave, swarm_multiplier);

    let id = *next_enemy_id;
    *next_enemy_id += 1;

    world.spawn((
        Enemy,
        EnemyInfo {
            id,
            archetype,
            spawn_wave: wave,
            points: profile.points,
            facing_right: true,
        },
        Position(position),
        Velocity(velocity),
        Health::full(stats.health),
        CombatStats {
            damage: stats.damage,
            speed: stats.speed,
        },
        BehaviorCtl::spawned_at(now_secs),
    ));

    (id, position)
}

/// Spawn the two Splitling children of a dead Splitter, flung outward from
/// the death position. Splitlings never split again.
pub fn spawn_splitlings(
    world: &mut World,
    next_enemy_id: &mut u32,
    position: Vec2,
    wave: u32,
    swarm_multiplier: Option<f32>,
    now_secs: f32,
) -> [(u32, Vec2); 2] {
    let burst = 180.0;
    let left = spawn_enemy_at(
        world,
        next_enemy_id,
        EnemyArchetype::Splitling,
        position,
        Vec2::new(-burst, JUMP_VELOCITY * 0.4),
        wave,
        swarm_multiplier,
        now_secs,
    );
    let right = spawn_enemy_at(
        world,
        next_enemy_id,
        EnemyArchetype::Splitling,
        position,
        Vec2::new(burst, JUMP_VELOCITY * 0.4),
        wave,
        swarm_multiplier,
        now_secs,
    );
    [left, right]
}
