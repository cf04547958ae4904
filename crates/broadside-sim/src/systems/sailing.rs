//! Sailing system: advances every ship by one tick in the shared wind.

use hecs::World;
use tracing::debug;

use broadside_core::components::ShipId;
use broadside_core::events::VesselEvent;
use broadside_core::types::Wind;

use crate::shared::SharedVessel;

/// Update all ships with the same wind snapshot.
pub fn run(world: &mut World, dt: f64, wind: Wind, events: &mut Vec<VesselEvent>) {
    for (_entity, (ship_id, vessel)) in world.query_mut::<(&ShipId, &SharedVessel)>() {
        let outcome = vessel.update(dt, wind);
        if outcome.capsized {
            debug!(ship_id = ship_id.0, wind_speed = wind.speed, "capsized");
            events.push(VesselEvent::Capsized { ship_id: ship_id.0 });
        }
    }
}
