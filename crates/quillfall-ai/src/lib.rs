//! Enemy AI for QUILLFALL.
//!
//! Implements enemy behavior state machines and archetype-driven
//! movement and attack profiles.

pub mod fsm;
pub mod profiles;

pub use quillfall_core as core;

#[cfg(test)]
mod tests;
