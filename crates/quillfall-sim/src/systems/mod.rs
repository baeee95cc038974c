//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only snapshot builder). They do not own state.

pub mod behavior;
pub mod cleanup;
pub mod movement;
pub mod snapshot;
pub mod spawner;
