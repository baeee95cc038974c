//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{BehaviorState, EnemyArchetype};

/// Marks an entity as a live enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Identity and provenance of an enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyInfo {
    /// Stable id handed to external collaborators (collision, presentation).
    pub id: u32,
    pub archetype: EnemyArchetype,
    /// Wave the enemy was created in; drives stat scaling and XP value.
    pub spawn_wave: u32,
    /// Score awarded on kill.
    pub points: u32,
    /// Horizontal facing, updated each tick. Drives the Shellback block cone.
    pub facing_right: bool,
}

/// Hit points. `current` is clamped at zero; death is the single terminal
/// transition and is reported exactly once by the damage contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn full(max: f32) -> Self {
        Self { current: max, max }
    }

    /// Remaining-health fraction in [0, 1].
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }
}

/// Wave-scaled combat stats, fixed at spawn time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatStats {
    pub damage: f32,
    pub speed: f32,
}

/// Behavior bookkeeping for the per-archetype state machine.
///
/// Timers are absolute simulation-clock readings so elapsed spans survive
/// state changes without per-tick accumulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorCtl {
    pub state: BehaviorState,
    /// Simulation time at which the current state was entered.
    pub state_entered_secs: f32,
    /// Simulation time of the last projectile volley.
    pub last_fire_secs: f32,
    /// Simulation time of the last special action (roll, charge, dive, surface).
    pub last_special_secs: f32,
    /// Captured target point for committed actions (dive, roll, charge).
    pub committed: Option<Vec2>,
    /// Boss phase index (1-based); 0 for non-bosses.
    pub boss_phase: u8,
}

impl BehaviorCtl {
    pub fn spawned_at(now_secs: f32) -> Self {
        Self {
            state: BehaviorState::Approach,
            state_entered_secs: now_secs,
            // Backdated so fixed-rate timers start their first cooldown at spawn.
            last_fire_secs: now_secs,
            last_special_secs: now_secs,
            committed: None,
            boss_phase: 0,
        }
    }
}
