//! Snapshot system: builds a FleetSnapshot from the current world state.
//!
//! This system is read-only: it never modifies the world.

use hecs::World;

use broadside_core::events::VesselEvent;
use broadside_core::state::{FleetSnapshot, VesselView};
use broadside_core::types::{SimTime, Wind};

use crate::shared::SharedVessel;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    wind: Wind,
    events: Vec<VesselEvent>,
) -> FleetSnapshot {
    FleetSnapshot {
        time: *time,
        wind,
        vessels: build_vessels(world),
        events,
    }
}

fn build_vessels(world: &World) -> Vec<VesselView> {
    let mut query = world.query::<&SharedVessel>();
    let mut vessels: Vec<VesselView> = query.iter().map(|(_, v)| v.snapshot()).collect();
    vessels.sort_by_key(|v| v.id);
    vessels
}
