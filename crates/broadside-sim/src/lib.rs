//! Sailing simulation for BROADSIDE.
//!
//! `VesselState` is the per-ship physics and gunnery core. The engine owns
//! a hecs world of shared ship handles, runs systems at a fixed tick rate,
//! and produces FleetSnapshots.

pub mod engine;
pub mod physics;
pub mod shared;
pub mod systems;
pub mod vessel;
pub mod weather;
pub mod world_setup;

pub use broadside_core as core;
pub use engine::SimulationEngine;
pub use shared::SharedVessel;
pub use vessel::VesselState;

#[cfg(test)]
mod tests;
