//! Player commands sent from external collaborators to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Guards
//! against out-of-phase commands (starting an active wave, resuming while
//! running) are defined as no-ops, not errors.

use serde::{Deserialize, Serialize};

/// All possible player/collaborator actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a fresh run: reset progression, modifiers, and the wave state.
    StartRun,
    /// Start the next wave. No-op while a wave is active, refused once the
    /// infinite-swarm threshold wave has been reached.
    StartWave,
    /// The player picked an upgrade from a choice screen.
    AcquireUpgrade { upgrade_id: String },
    /// The player picked up a treasure chest.
    CollectChest,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
