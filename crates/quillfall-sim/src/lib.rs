//! Simulation engine for QUILLFALL.
//!
//! Owns the hecs ECS world, runs the wave/combat/progression loop once per
//! frame, and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod loot;
pub mod progression;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use quillfall_core as core;
