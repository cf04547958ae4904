//! Fundamental geometric, wind, and time types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::NO_WIND_DIRECTION;

/// Position on the sea chart.
/// x = longitude, y = latitude. Heading 0° points along +y.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

/// Wind conditions at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed, non-negative.
    pub speed: f64,
    /// Direction in degrees. Values outside [0, 360) mean no direction is set.
    pub direction: f64,
}

impl Default for Wind {
    fn default() -> Self {
        Self::undirected(0.0)
    }
}

impl Wind {
    pub fn new(speed: f64, direction: f64) -> Self {
        Self { speed, direction }
    }

    /// Wind with strength but no direction. Heading has no effect on speed.
    pub fn undirected(speed: f64) -> Self {
        Self {
            speed,
            direction: NO_WIND_DIRECTION,
        }
    }

    pub fn has_direction(&self) -> bool {
        (0.0..360.0).contains(&self.direction)
    }
}

/// Anything that can report the current wind.
///
/// Implementors must return one consistent value for the duration of a ship update.
pub trait WindSource {
    fn wind(&self) -> Wind;
}

impl WindSource for Wind {
    fn wind(&self) -> Wind {
        *self
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of the given length.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
