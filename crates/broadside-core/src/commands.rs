//! Helm and combat commands sent to the fleet.
//!
//! Commands are queued and applied at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All actions a controller or combat resolver can take on a ship.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HelmCommand {
    // --- Helm ---
    /// Steer toward a heading in degrees. Any value is accepted.
    SetDesiredHeading { ship_id: u32, heading: f64 },
    /// Change the amount of canvas carried.
    SetSailAmount { ship_id: u32, sail: SailAmount },

    // --- Combat ---
    /// Fire one gun battery.
    Fire {
        ship_id: u32,
        direction: FiringDirection,
    },
    /// Apply hull damage.
    Damage { ship_id: u32, amount: f64 },
    /// Credit collected plunder.
    AddLoot { ship_id: u32, amount: u64 },
}

impl HelmCommand {
    /// The ship this command is addressed to.
    pub fn ship_id(&self) -> u32 {
        match self {
            Self::SetDesiredHeading { ship_id, .. }
            | Self::SetSailAmount { ship_id, .. }
            | Self::Fire { ship_id, .. }
            | Self::Damage { ship_id, .. }
            | Self::AddLoot { ship_id, .. } => *ship_id,
        }
    }
}
