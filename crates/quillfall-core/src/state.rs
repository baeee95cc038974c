//! Game state snapshot — the complete visible state produced each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete simulation state broadcast to collaborators after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub progression: ProgressionView,
    pub enemies: Vec<EnemyView>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// A live enemy as seen by presentation and collision collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub damage: f32,
    pub state: BehaviorState,
    /// Boss phase index (1-based); 0 for non-bosses.
    pub boss_phase: u8,
    pub facing_right: bool,
    /// Burrowed enemies have no collision and deal no contact damage.
    pub collidable: bool,
}

/// Wave scheduler status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_number: u32,
    pub is_active: bool,
    pub is_boss_wave: bool,
    pub spawned_count: u32,
    pub total_spawns: u32,
    pub queued: u32,
    pub live_enemies: u32,
    pub infinite_swarm_active: bool,
}

/// Progression status for the HUD and upgrade UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressionView {
    pub level: u32,
    pub xp: f32,
    pub xp_required: f32,
    pub pending_level_ups: u32,
    /// Clamped prosperity actually used by the derived formulas.
    pub prosperity: f32,
    pub chests_collected: u32,
    pub chest_drop_chance: f32,
    pub crit_bonus: f32,
    pub swarm_difficulty: f32,
    pub swarm_spawn_interval: f32,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub enemies_killed: u32,
    pub waves_cleared: u32,
}
