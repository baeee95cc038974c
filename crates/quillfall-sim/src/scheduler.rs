//! Wave scheduling — spawn queue generation and in-wave pacing.
//!
//! A wave is one discrete batch of enemies: a queue of archetypes drained
//! at an accelerating interval, complete once the queue is empty and the
//! last enemy has fallen. Past the infinite-swarm threshold the queue loop
//! is replaced by continuous spawning driven by the progression engine.

use std::collections::VecDeque;

use quillfall_core::constants::*;
use quillfall_core::enums::EnemyArchetype;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Archetype unlock thresholds and draw weights, earliest first.
/// Weights favor the easier, earlier-unlocked archetypes. Splitlings are
/// spawned only by Splitter deaths, never by the scheduler.
const UNLOCK_TABLE: &[(EnemyArchetype, u32, f32)] = &[
    (EnemyArchetype::Scurrier, 1, 40.0),
    (EnemyArchetype::Spitter, 2, 25.0),
    (EnemyArchetype::Swooper, 3, 20.0),
    (EnemyArchetype::Splitter, 4, 15.0),
    (EnemyArchetype::Shellback, 5, 12.0),
    (EnemyArchetype::Burrower, 6, 10.0),
    (EnemyArchetype::Mender, 8, 8.0),
];

/// Scheduler state for the current run.
#[derive(Debug, Clone, Default)]
pub struct WaveState {
    /// Current wave number, 0 before the first wave starts.
    pub wave_number: u32,
    pub spawn_queue: VecDeque<EnemyArchetype>,
    pub spawned_count: u32,
    pub total_spawns: u32,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f32,
    pub is_active: bool,
    pub infinite_swarm_active: bool,
}

/// Whether wave `n` is a boss wave.
pub fn is_boss_wave(n: u32) -> bool {
    n > 0 && n % BOSS_WAVE_INTERVAL == 0
}

/// Enemy count for a normal (non-boss) wave.
///
/// Computed in f64 with a tolerance before flooring so `5 * 1.2` counts as
/// 6 despite 1.2 not being exactly representable.
pub fn normal_wave_size(n: u32) -> u32 {
    let scaled = WAVE_BASE_ENEMY_COUNT as f64 * WAVE_ENEMY_SCALE.powi(n as i32 - 1);
    ((scaled + 1e-6).floor() as u32).min(MAX_ENEMIES_PER_WAVE)
}

/// Archetypes available at wave `n`, with their draw weights.
fn unlocked_at(n: u32) -> Vec<(EnemyArchetype, f32)> {
    UNLOCK_TABLE
        .iter()
        .filter(|(_, unlock, _)| n >= *unlock)
        .map(|(archetype, _, weight)| (*archetype, *weight))
        .collect()
}

/// Weighted draw from the archetypes unlocked at wave `n`.
pub fn draw_archetype(n: u32, rng: &mut ChaCha8Rng) -> EnemyArchetype {
    let pool = unlocked_at(n.max(1));
    let total: f32 = pool.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (archetype, weight) in &pool {
        if roll < *weight {
            return *archetype;
        }
        roll -= weight;
    }
    pool[0].0
}

/// Build the spawn queue for wave `n`.
///
/// Boss waves get a boss (ground and flying alternate by boss index); the
/// first boss wave is a lone boss, later ones add `boss_index + 2` minions.
/// Normal waves are a weighted draw from the unlocked pool.
pub fn generate_spawn_queue(n: u32, rng: &mut ChaCha8Rng) -> VecDeque<EnemyArchetype> {
    let mut queue = VecDeque::new();

    if is_boss_wave(n) {
        let boss_index = n / BOSS_WAVE_INTERVAL;
        let boss = if boss_index % 2 == 1 {
            EnemyArchetype::Boss
        } else {
            EnemyArchetype::SkyBoss
        };
        queue.push_back(boss);
        if boss_index > 1 {
            for _ in 0..(boss_index + 2) {
                queue.push_back(draw_archetype(n, rng));
            }
        }
        return queue;
    }

    for _ in 0..normal_wave_size(n) {
        queue.push_back(draw_archetype(n, rng));
    }
    queue
}

/// Interval between the first spawns of wave `n`. Steps down as waves
/// progress so later waves open faster, clamped at a floor.
pub fn start_interval_for_wave(n: u32) -> f32 {
    let steps = n.saturating_sub(1) / SPAWN_SCALING_INTERVAL;
    (SPAWN_INTERVAL_START - steps as f32 * SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_START_FLOOR)
}

impl WaveState {
    /// Seconds between spawns right now. Interpolates from the wave's start
    /// interval to the fixed end interval as the queue drains, so spawns
    /// start slow and accelerate.
    pub fn current_spawn_interval(&self) -> f32 {
        let start = start_interval_for_wave(self.wave_number);
        if self.total_spawns <= 1 {
            return start;
        }
        let progress =
            (self.spawned_count as f32 / (self.total_spawns - 1) as f32).clamp(0.0, 1.0);
        start + (SPAWN_INTERVAL_END - start) * progress
    }

    /// Begin the next wave. No-op while a wave is running; refused once the
    /// infinite-swarm threshold has been reached. Returns the new wave
    /// number when a wave actually started.
    pub fn start_wave(&mut self, rng: &mut ChaCha8Rng) -> Option<u32> {
        if self.is_active || self.infinite_swarm_active {
            return None;
        }
        if self.wave_number >= INFINITE_SWARM_WAVE {
            return None;
        }

        self.wave_number += 1;
        self.spawn_queue = generate_spawn_queue(self.wave_number, rng);
        self.total_spawns = self.spawn_queue.len() as u32;
        self.spawned_count = 0;
        self.spawn_timer = 0.0;
        self.is_active = true;
        Some(self.wave_number)
    }

    /// Wave completion predicate: queue drained and no enemy left standing.
    pub fn complete(&self, live_enemies: u32) -> bool {
        self.is_active && self.spawn_queue.is_empty() && live_enemies == 0
    }
}
