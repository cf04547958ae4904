//! Helm system: applies queued commands to the ships they address.

use hecs::World;
use tracing::{debug, warn};

use broadside_core::commands::HelmCommand;
use broadside_core::components::ShipId;
use broadside_core::events::VesselEvent;

use crate::shared::SharedVessel;

/// Look up a ship's handle by id.
pub fn find_vessel(world: &World, ship_id: u32) -> Option<SharedVessel> {
    let mut query = world.query::<(&ShipId, &SharedVessel)>();
    let found = query
        .iter()
        .find(|(_, (id, _))| id.0 == ship_id)
        .map(|(_, (_, vessel))| vessel.clone());
    found
}

/// Apply one command. Commands for ships that are not afloat are dropped.
pub fn apply(world: &World, command: HelmCommand, events: &mut Vec<VesselEvent>) {
    let ship_id = command.ship_id();
    let Some(vessel) = find_vessel(world, ship_id) else {
        warn!(ship_id, ?command, "command for unknown ship ignored");
        return;
    };

    match command {
        HelmCommand::SetDesiredHeading { heading, .. } => vessel.set_desired_heading(heading),
        HelmCommand::SetSailAmount { sail, .. } => vessel.set_sail_amount(sail),
        HelmCommand::Fire { direction, .. } => {
            let (fired, remaining_secs) = vessel.with(|v| {
                let fired = v.fire(direction);
                (fired, v.reload_remaining(direction))
            });
            if fired {
                debug!(ship_id, ?direction, "fired");
                events.push(VesselEvent::Fired { ship_id, direction });
            } else {
                debug!(ship_id, ?direction, remaining_secs, "still reloading");
                events.push(VesselEvent::StillReloading {
                    ship_id,
                    direction,
                    remaining_secs,
                });
            }
        }
        HelmCommand::Damage { amount, .. } => vessel.damage(amount),
        HelmCommand::AddLoot { amount, .. } => vessel.add_loot(amount),
    }
}
