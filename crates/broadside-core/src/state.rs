//! Fleet snapshot: the complete visible state published after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::SailAmount;
use crate::events::VesselEvent;
use crate::types::{Position, SimTime, Wind};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub time: SimTime,
    /// Wind the ships sailed in during this tick.
    pub wind: Wind,
    /// Ships still afloat, ordered by id.
    pub vessels: Vec<VesselView>,
    pub events: Vec<VesselEvent>,
}

/// One ship as seen from outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VesselView {
    pub id: u32,
    pub position: Position,
    /// Degrees, [0, 360).
    pub heading: f64,
    pub desired_heading: f64,
    pub speed: f64,
    pub sail: SailAmount,
    pub health: f64,
    pub max_health: f64,
    pub loot: u64,
    /// Remaining reload seconds, indexed by firing direction id.
    pub reload_secs: Vec<f64>,
    pub dead: bool,
}
