//! Simulation engine driving the whole fleet.
//!
//! `SimulationEngine` owns the hecs world of ships, the weather and the
//! helm command queue. Each tick it applies queued commands, samples one
//! wind for every ship, advances all ships, removes the dead and produces a
//! `FleetSnapshot`. Completely headless, so runs are deterministic for a
//! given seed and input.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use broadside_core::commands::HelmCommand;
use broadside_core::constants::DT;
use broadside_core::events::VesselEvent;
use broadside_core::state::FleetSnapshot;
use broadside_core::tuning::ShipTuning;
use broadside_core::types::{Position, SimTime, WindSource};

use crate::shared::SharedVessel;
use crate::systems;
use crate::weather::{Weather, WeatherConfig};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Length of one `tick()` in seconds.
    pub tick_secs: f64,
    /// Handling given to every ship spawned by the engine.
    pub tuning: ShipTuning,
    pub weather: WeatherConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_secs: DT,
            tuning: ShipTuning::default(),
            weather: WeatherConfig::default(),
        }
    }
}

pub struct SimulationEngine {
    world: World,
    time: SimTime,
    tick_secs: f64,
    tuning: ShipTuning,
    weather: Weather,
    rng: ChaCha8Rng,
    next_ship_id: u32,
    command_queue: VecDeque<HelmCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<VesselEvent>,
}

impl SimulationEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            tick_secs: config.tick_secs,
            tuning: config.tuning,
            weather: Weather::new(config.weather, config.seed),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            next_ship_id: 1,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Launch a ship and return a handle external callers may share.
    pub fn spawn_vessel(&mut self, health: f64, position: Position) -> SharedVessel {
        world_setup::spawn_vessel(
            &mut self.world,
            &mut self.next_ship_id,
            health,
            position,
            self.tuning,
        )
    }

    /// Launch `count` ships at seeded random positions and courses.
    pub fn spawn_fleet(&mut self, count: usize) -> Vec<SharedVessel> {
        world_setup::spawn_fleet(
            &mut self.world,
            &mut self.rng,
            &mut self.next_ship_id,
            count,
            self.tuning,
        )
    }

    /// Handle to a ship that is still afloat.
    pub fn vessel(&self, ship_id: u32) -> Option<SharedVessel> {
        systems::helm::find_vessel(&self.world, ship_id)
    }

    pub fn vessel_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HelmCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HelmCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by the configured tick length.
    pub fn tick(&mut self) -> FleetSnapshot {
        self.step(self.tick_secs)
    }

    /// Advance the whole fleet by `elapsed` seconds and return the resulting snapshot.
    pub fn step(&mut self, elapsed: f64) -> FleetSnapshot {
        self.process_commands();

        self.weather.advance(elapsed);
        let wind = self.weather.wind();

        systems::sailing::run(&mut self.world, elapsed, wind, &mut self.events);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        self.time.advance(elapsed);

        trace!(
            tick = self.time.tick,
            ships = self.world.len(),
            wind_speed = wind.speed,
            wind_direction = wind.direction,
            "tick"
        );

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, wind, events)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tick_secs(&self) -> f64 {
        self.tick_secs
    }

    pub fn tuning(&self) -> &ShipTuning {
        &self.tuning
    }

    pub fn weather(&self) -> &Weather {
        &self.weather
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            systems::helm::apply(&self.world, command, &mut self.events);
        }
    }
}
