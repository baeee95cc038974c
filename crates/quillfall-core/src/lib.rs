//! Core types and definitions for the QUILLFALL combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, the upgrade catalog,
//! the modifier pipeline, and tuning constants.
//! It has no dependency on any runtime framework or renderer.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod modifiers;
pub mod state;
pub mod target;
pub mod types;
pub mod upgrades;

#[cfg(test)]
mod tests;
