//! Per-ship kinematic and combat state.
//!
//! `VesselState` is advanced once per tick by `update`. Everything else is a
//! direct read or write of intent and combat state. No operation validates
//! its inputs: a negative elapsed time or a NaN heading is a caller error.

use broadside_core::enums::{FiringDirection, SailAmount, FIRING_DIRECTION_COUNT};
use broadside_core::state::VesselView;
use broadside_core::tuning::ShipTuning;
use broadside_core::types::{Position, Wind};

use crate::physics;

/// What happened to a ship during one `update`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    /// The ship was alive before the update and capsized during it.
    pub capsized: bool,
}

#[derive(Debug, Clone)]
pub struct VesselState {
    id: u32,
    max_health: f64,
    health: f64,
    loot: u64,
    position: Position,
    speed: f64,
    /// Degrees, always in [0, 360).
    heading: f64,
    desired_heading: f64,
    sail: SailAmount,
    /// Seconds until each battery can fire again, indexed by `FiringDirection::id`.
    reload: [f64; FIRING_DIRECTION_COUNT],
    tuning: ShipTuning,
}

impl VesselState {
    /// Launch a ship at rest, heading 0°, sails furled and guns loaded.
    pub fn new(id: u32, health: f64, position: Position, tuning: ShipTuning) -> Self {
        Self {
            id,
            max_health: health,
            health,
            loot: 0,
            position,
            speed: 0.0,
            heading: 0.0,
            desired_heading: 0.0,
            sail: SailAmount::default(),
            reload: [0.0; FIRING_DIRECTION_COUNT],
            tuning,
        }
    }

    /// Advance the ship by `elapsed` seconds in the given wind.
    pub fn update(&mut self, elapsed: f64, wind: Wind) -> UpdateOutcome {
        let was_alive = !self.is_dead();

        if self.heading != self.desired_heading {
            self.heading = physics::turn_toward(
                self.heading,
                self.desired_heading,
                self.tuning.turn_speed * elapsed,
                self.tuning.handling,
            );
        }

        // A damaged hull cannot carry as much way.
        let target = physics::apply_wind_physics(
            (self.health / self.max_health) * self.sail.modifier() * wind.speed,
            self.heading,
            wind,
        );
        self.speed = physics::approach_speed(
            self.speed,
            target,
            self.tuning.acceleration * wind.speed * elapsed,
            self.tuning.handling,
        );

        if self.speed >= self.tuning.max_speed {
            self.health = 0.0;
        }

        for timer in self.reload.iter_mut() {
            *timer = (*timer - elapsed).max(0.0);
        }

        let step = physics::displacement(self.heading, self.speed);
        self.position = (self.position.as_dvec2() + step).into();

        UpdateOutcome {
            capsized: was_alive && self.is_dead(),
        }
    }

    /// Fire a battery. Succeeds only when its reload timer is exactly zero.
    pub fn fire(&mut self, direction: FiringDirection) -> bool {
        let timer = &mut self.reload[direction.id()];
        if *timer == 0.0 {
            *timer = self.tuning.recoil;
            true
        } else {
            false
        }
    }

    /// Subtract hull points. Health may go below zero.
    pub fn damage(&mut self, amount: f64) {
        self.health -= amount;
    }

    pub fn add_loot(&mut self, amount: u64) {
        self.loot = self.loot.saturating_add(amount);
    }

    pub fn set_desired_heading(&mut self, angle: f64) {
        self.desired_heading = angle;
    }

    pub fn set_sail_amount(&mut self, sail: SailAmount) {
        self.sail = sail;
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn desired_heading(&self) -> f64 {
        self.desired_heading
    }

    pub fn sail_amount(&self) -> SailAmount {
        self.sail
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn latitude(&self) -> f64 {
        self.position.y
    }

    pub fn longitude(&self) -> f64 {
        self.position.x
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn max_health(&self) -> f64 {
        self.max_health
    }

    pub fn loot(&self) -> u64 {
        self.loot
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    /// Seconds until `direction` can fire again.
    pub fn reload_remaining(&self, direction: FiringDirection) -> f64 {
        self.reload[direction.id()]
    }

    pub fn tuning(&self) -> &ShipTuning {
        &self.tuning
    }

    pub fn view(&self) -> VesselView {
        VesselView {
            id: self.id,
            position: self.position,
            heading: self.heading,
            desired_heading: self.desired_heading,
            speed: self.speed,
            sail: self.sail,
            health: self.health,
            max_health: self.max_health,
            loot: self.loot,
            reload_secs: self.reload.to_vec(),
            dead: self.is_dead(),
        }
    }
}
