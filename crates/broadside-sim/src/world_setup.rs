//! Ship spawn factories for setting up the fleet world.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use broadside_core::components::ShipId;
use broadside_core::constants::{DEFAULT_SHIP_HEALTH, FLEET_SPAWN_RADIUS};
use broadside_core::enums::SailAmount;
use broadside_core::tuning::ShipTuning;
use broadside_core::types::Position;

use crate::shared::SharedVessel;
use crate::vessel::VesselState;

/// Spawn one ship with the next free id and return its handle.
pub fn spawn_vessel(
    world: &mut World,
    next_ship_id: &mut u32,
    health: f64,
    position: Position,
    tuning: ShipTuning,
) -> SharedVessel {
    let id = *next_ship_id;
    *next_ship_id += 1;

    let vessel = SharedVessel::new(VesselState::new(id, health, position, tuning));
    world.spawn((ShipId(id), vessel.clone()));
    info!(ship_id = id, x = position.x, y = position.y, health, "ship launched");
    vessel
}

/// Scatter `count` ships uniformly over a disc around the origin, each under
/// half sail on a random course.
pub fn spawn_fleet(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_ship_id: &mut u32,
    count: usize,
    tuning: ShipTuning,
) -> Vec<SharedVessel> {
    let mut fleet = Vec::with_capacity(count);
    for _ in 0..count {
        let bearing = rng.gen_range(0.0..TAU);
        // sqrt keeps the density uniform over the disc
        let range = FLEET_SPAWN_RADIUS * rng.gen::<f64>().sqrt();
        let position = Position::from(DVec2::from_angle(bearing) * range);

        let vessel = spawn_vessel(world, next_ship_id, DEFAULT_SHIP_HEALTH, position, tuning);
        vessel.set_desired_heading(rng.gen_range(0.0..360.0));
        vessel.set_sail_amount(SailAmount::Half);
        fleet.push(vessel);
    }
    fleet
}
