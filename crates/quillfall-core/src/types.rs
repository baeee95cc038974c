//! Fundamental geometric and simulation types.
//!
//! The arena uses screen-space coordinates: x grows to the right,
//! y grows downward, so "above the target" means a smaller y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in arena space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in arena space (pixels per second).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking. Advanced by the externally supplied frame delta.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Angle from this position toward another, in radians
    /// (0 = +x, measured counterclockwise in screen space).
    pub fn angle_to(&self, other: &Position) -> f32 {
        let d = other.0 - self.0;
        d.y.atan2(d.x)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude in pixels per second.
    pub fn speed(&self) -> f32 {
        self.0.length()
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Smallest absolute angular difference between two angles, in `[0, PI]`.
pub fn angle_difference(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).rem_euclid(std::f32::consts::TAU);
    if diff > std::f32::consts::PI {
        diff = std::f32::consts::TAU - diff;
    }
    diff
}
