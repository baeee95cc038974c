//! The target/player collaborator contract.
//!
//! The core never owns the player. Rendering, input, and player physics all
//! live outside; the simulation only reads position/liveness and calls the
//! two mutators below.

use glam::Vec2;

/// The player as seen by enemies.
pub trait PlayerTarget {
    /// Current position in arena space.
    fn position(&self) -> Vec2;

    /// Whether the player is still alive. A dead target makes every enemy
    /// hold position rather than crash or chase a corpse.
    fn is_alive(&self) -> bool;

    /// Apply damage. Returns true if the hit was absorbed (shield, i-frames)
    /// rather than applied to health.
    fn take_damage(&mut self, amount: f32) -> bool;

    /// Restore health, clamped by the collaborator.
    fn heal(&mut self, amount: f32);
}
