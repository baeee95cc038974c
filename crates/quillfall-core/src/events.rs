//! One-shot events emitted by the simulation for presentation and audio.
//!
//! Drained into every snapshot; consumers display them and feed nothing back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyArchetype;

/// Events for the presentation collaborator (rendering/audio/particles).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// An enemy entered the arena.
    EnemySpawned {
        enemy_id: u32,
        archetype: EnemyArchetype,
        position: Vec2,
    },
    /// An enemy fired a projectile volley at the target.
    EnemyFired {
        enemy_id: u32,
        position: Vec2,
        aim: Vec2,
        projectile_speed: f32,
        damage: f32,
        burst: u32,
    },
    /// An enemy died. `xp` is the award already applied to progression.
    EnemyKilled {
        enemy_id: u32,
        archetype: EnemyArchetype,
        position: Vec2,
        points: u32,
        xp: u32,
    },
    /// A Burrower broke the surface (area strike resolved this tick).
    EnemySurfaced { enemy_id: u32, position: Vec2 },
    /// A Mender healed a wounded ally.
    EnemyHealed {
        healer_id: u32,
        target_id: u32,
        amount: f32,
    },
    /// A Shellback rejected frontal damage.
    DamageBlocked { enemy_id: u32 },
    /// The wave's spawn queue drained and the last enemy fell.
    WaveComplete { wave: u32 },
    /// The upcoming wave is a boss wave.
    BossWaveWarning { wave: u32 },
    /// The player leveled up (one event per level gained).
    LevelUp { level: u32 },
    /// A treasure chest was collected. Rigged chests guarantee rare loot.
    ChestCollected { rigged: bool },
    /// Discrete waves are over; the endless escalation has begun.
    InfiniteSwarmStarted,
}
