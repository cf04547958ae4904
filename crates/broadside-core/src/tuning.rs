//! Per-ship handling parameters and their loading from JSON.

use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::HandlingModel;

/// Handling parameters passed into every ship at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipTuning {
    /// Maximum heading change in degrees per second.
    pub turn_speed: f64,
    /// Maximum speed change per unit of wind speed per second.
    pub acceleration: f64,
    /// A ship at or above this speed capsizes.
    pub max_speed: f64,
    /// Reload time of a gun battery in seconds.
    pub recoil: f64,
    pub handling: HandlingModel,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            turn_speed: DEFAULT_TURN_SPEED,
            acceleration: DEFAULT_ACCELERATION,
            max_speed: DEFAULT_MAX_SPEED,
            recoil: DEFAULT_RECOIL,
            handling: HandlingModel::default(),
        }
    }
}

impl ShipTuning {
    /// Parse tuning from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let tuning: ShipTuning = serde_json::from_str(json).map_err(TuningError::Parse)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read and parse a JSON tuning file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(TuningError::Io)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would make the handling model meaningless.
    pub fn validate(&self) -> Result<(), TuningError> {
        check_non_negative("turn_speed", self.turn_speed)?;
        check_non_negative("acceleration", self.acceleration)?;
        check_non_negative("recoil", self.recoil)?;
        if !self.max_speed.is_finite() || self.max_speed <= 0.0 {
            return Err(TuningError::Invalid {
                field: "max_speed",
                value: self.max_speed,
            });
        }
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid { field, value })
    }
}

/// Failure to obtain a usable `ShipTuning`.
#[derive(Debug)]
pub enum TuningError {
    Io(io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, value: f64 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read tuning file: {e}"),
            Self::Parse(e) => write!(f, "malformed tuning JSON: {e}"),
            Self::Invalid { field, value } => {
                write!(f, "tuning field `{field}` has invalid value {value}")
            }
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}
