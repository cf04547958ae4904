//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// How much canvas a ship is carrying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SailAmount {
    /// All sails stowed. The ship drifts to a stop.
    #[default]
    Furled,
    /// Storm canvas only.
    Reefed,
    Half,
    Full,
}

impl SailAmount {
    pub const ALL: [SailAmount; 4] = [
        SailAmount::Furled,
        SailAmount::Reefed,
        SailAmount::Half,
        SailAmount::Full,
    ];

    /// Fraction of the wind speed this sail setting converts into hull speed.
    pub fn modifier(&self) -> f64 {
        match self {
            Self::Furled => 0.0,
            Self::Reefed => 0.25,
            Self::Half => 0.5,
            Self::Full => 1.0,
        }
    }
}

/// Number of independent gun batteries on a ship.
pub const FIRING_DIRECTION_COUNT: usize = 4;

/// Gun battery, identified by the side of the ship it fires from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FiringDirection {
    Port,
    Starboard,
    /// Bow chasers.
    Bow,
    /// Stern chasers.
    Stern,
}

impl FiringDirection {
    pub const ALL: [FiringDirection; FIRING_DIRECTION_COUNT] = [
        FiringDirection::Port,
        FiringDirection::Starboard,
        FiringDirection::Bow,
        FiringDirection::Stern,
    ];

    /// Index of this battery's reload timer.
    pub fn id(&self) -> usize {
        match self {
            Self::Port => 0,
            Self::Starboard => 1,
            Self::Bow => 2,
            Self::Stern => 3,
        }
    }
}

/// Which helm and speed response a ship uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlingModel {
    /// Legacy handling: the heading difference only wraps on the positive
    /// side and is only rate-limited when turning to starboard; speed is
    /// pushed by the clamped `speed - target` difference.
    #[default]
    Classic,
    /// Shortest-path turning limited in both directions, and speed that
    /// converges on the wind-derived target.
    Balanced,
}

/// Sea state driving the wind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Calm,
    #[default]
    Breeze,
    Gale,
    Storm,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Breeze => "breeze",
            Self::Gale => "gale",
            Self::Storm => "storm",
        }
    }

    /// Base wind speed for this condition.
    pub fn wind_speed(&self) -> f64 {
        match self {
            Self::Calm => WIND_SPEED_CALM,
            Self::Breeze => WIND_SPEED_BREEZE,
            Self::Gale => WIND_SPEED_GALE,
            Self::Storm => WIND_SPEED_STORM,
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "calm" => Some(Self::Calm),
            "breeze" => Some(Self::Breeze),
            "gale" => Some(Self::Gale),
            "storm" => Some(Self::Storm),
            _ => None,
        }
    }
}
