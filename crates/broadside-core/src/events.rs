//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::FiringDirection;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VesselEvent {
    /// A battery fired and started reloading.
    Fired {
        ship_id: u32,
        direction: FiringDirection,
    },
    /// Fire order refused because the battery is still reloading.
    StillReloading {
        ship_id: u32,
        direction: FiringDirection,
        remaining_secs: f64,
    },
    /// Ship went over its maximum speed and capsized.
    Capsized { ship_id: u32 },
    /// Ship removed from the fleet after its health reached zero.
    Sunk { ship_id: u32, loot: u64 },
}
