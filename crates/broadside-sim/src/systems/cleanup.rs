//! Cleanup system: removes ships whose health has reached zero.

use hecs::{Entity, World};
use tracing::info;

use broadside_core::components::ShipId;
use broadside_core::events::VesselEvent;

use crate::shared::SharedVessel;

/// Despawn dead ships and report each one as sunk.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>, events: &mut Vec<VesselEvent>) {
    despawn_buffer.clear();

    for (entity, (ship_id, vessel)) in world.query_mut::<(&ShipId, &SharedVessel)>() {
        let (dead, loot) = vessel.with(|v| (v.is_dead(), v.loot()));
        if dead {
            info!(ship_id = ship_id.0, loot, "ship sunk");
            events.push(VesselEvent::Sunk {
                ship_id: ship_id.0,
                loot,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
