//! Snapshot system: queries the ECS world and builds a complete
//! GameStateSnapshot. Read-only over the world.

use hecs::World;
use quillfall_core::components::*;
use quillfall_core::enums::*;
use quillfall_core::events::GameEvent;
use quillfall_core::state::*;
use quillfall_core::types::{Position, SimTime, Velocity};

use crate::engine::ScoreState;
use crate::progression::{self, ProgressionState};
use crate::scheduler::{self, WaveState};

/// Build a complete GameStateSnapshot from the current simulation state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    prog: &ProgressionState,
    prosperity: f32,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    let enemies = build_enemies(world);
    let live_enemies = enemies
        .iter()
        .filter(|e| e.state != BehaviorState::Dead)
        .count() as u32;

    GameStateSnapshot {
        time: *time,
        phase,
        wave: WaveView {
            wave_number: wave.wave_number,
            is_active: wave.is_active,
            is_boss_wave: scheduler::is_boss_wave(wave.wave_number),
            spawned_count: wave.spawned_count,
            total_spawns: wave.total_spawns,
            queued: wave.spawn_queue.len() as u32,
            live_enemies,
            infinite_swarm_active: wave.infinite_swarm_active,
        },
        progression: ProgressionView {
            level: prog.level,
            xp: prog.xp,
            xp_required: progression::xp_for_level(prog.level),
            pending_level_ups: prog.pending_level_ups,
            prosperity,
            chests_collected: prog.chests_collected,
            chest_drop_chance: progression::chest_drop_chance(prosperity),
            crit_bonus: progression::crit_bonus(prosperity),
            swarm_difficulty: prog.difficulty_multiplier,
            swarm_spawn_interval: prog.swarm_spawn_interval,
        },
        enemies,
        score: ScoreView {
            score: score.score,
            enemies_killed: score.enemies_killed,
            waves_cleared: score.waves_cleared,
        },
        events,
    }
}

/// Build EnemyView list, sorted by stable id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(
            &EnemyInfo,
            &Position,
            &Velocity,
            &Health,
            &CombatStats,
            &BehaviorCtl,
        )>()
        .iter()
        .map(|(_, (info, pos, vel, health, stats, ctl))| EnemyView {
            id: info.id,
            archetype: info.archetype,
            position: pos.0,
            velocity: vel.0,
            health: health.current,
            max_health: health.max,
            damage: stats.damage,
            state: ctl.state,
            boss_phase: ctl.boss_phase,
            facing_right: info.facing_right,
            collidable: !(info.archetype == EnemyArchetype::Burrower
                && ctl.state == BehaviorState::Special),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}
