//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy behavioral class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Basic melee chaser. Jumps after targets on platforms.
    Scurrier,
    /// Ranged attacker that keeps its distance. Never jumps.
    Spitter,
    /// Flying dive-bomber. Hovers above the target, then commits to a dive.
    Swooper,
    /// Slow tank that blocks frontal damage and periodically rolls.
    Shellback,
    /// Alternates between an untouchable burrowed phase and a surfaced phase.
    Burrower,
    /// Ordinary chaser that splits into two Splitlings on death.
    Splitter,
    /// Small fast child of a Splitter. Never splits again.
    Splitling,
    /// Support unit that flees the target and heals wounded allies.
    Mender,
    /// Ground boss. Two health phases, charge attack.
    Boss,
    /// Flying boss. Three fire-cadence phases, dive-bomb attack.
    SkyBoss,
}

impl EnemyArchetype {
    /// Whether this archetype ignores gravity.
    pub fn is_airborne(self) -> bool {
        matches!(self, Self::Swooper | Self::SkyBoss)
    }

    /// Whether this archetype is a boss.
    pub fn is_boss(self) -> bool {
        matches!(self, Self::Boss | Self::SkyBoss)
    }
}

/// Behavior state shared by every archetype.
///
/// `Special` means something different per archetype (Swooper dive,
/// Shellback roll, Burrower burrowed phase, boss charge/dive-bomb) but an
/// enemy is never in two special modes at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BehaviorState {
    /// Closing distance to the target; no attacks yet.
    #[default]
    Approach,
    /// Archetype-specific engagement behavior (chase, strafe, hover, ...).
    Engage,
    /// Committed special action; runs to its completion condition.
    Special,
    /// Brief wind-down after a special action before re-engaging.
    Recover,
    /// Terminal. Set exactly once when health reaches zero.
    Dead,
}

/// Upgrade rarity tier, ordered common-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// All tiers in ascending order.
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    GameOver,
}
