//! Weather: the wind every ship sails in.
//!
//! The wind veers at a fixed rate and gusts around the condition's base
//! speed. Gusts come from a seeded RNG so voyages stay reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use broadside_core::constants::*;
use broadside_core::enums::WeatherCondition;
use broadside_core::types::{Wind, WindSource};

use crate::physics::normalize_degrees;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub condition: WeatherCondition,
    /// Degrees. Outside [0, 360) the wind has no direction.
    pub direction: f64,
    /// Degrees per second, positive veers clockwise.
    pub veer_rate: f64,
    /// Gust amplitude as a fraction of the base speed.
    pub gustiness: f64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            condition: WeatherCondition::default(),
            direction: 0.0,
            veer_rate: DEFAULT_WIND_VEER_RATE,
            gustiness: DEFAULT_GUSTINESS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Weather {
    condition: WeatherCondition,
    base_speed: f64,
    wind: Wind,
    veer_rate: f64,
    gustiness: f64,
    rng: ChaCha8Rng,
}

impl Weather {
    pub fn new(config: WeatherConfig, seed: u64) -> Self {
        let base_speed = config.condition.wind_speed();
        Self {
            condition: config.condition,
            base_speed,
            wind: Wind::new(base_speed, config.direction),
            veer_rate: config.veer_rate,
            gustiness: config.gustiness,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn condition(&self) -> WeatherCondition {
        self.condition
    }

    /// Move the weather forward by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if self.wind.has_direction() && self.veer_rate != 0.0 {
            self.wind.direction = normalize_degrees(self.wind.direction + self.veer_rate * dt);
        }
        if self.gustiness > 0.0 {
            let gust: f64 = self.rng.gen_range(-1.0..=1.0);
            self.wind.speed = (self.base_speed * (1.0 + self.gustiness * gust)).max(0.0);
        }
    }
}

impl WindSource for Weather {
    fn wind(&self) -> Wind {
        self.wind
    }
}

/// Roll a random sea state.
pub fn generate_weather(rng: &mut ChaCha8Rng) -> WeatherConfig {
    let roll: f64 = rng.gen();
    let condition = if roll < 0.10 {
        WeatherCondition::Calm
    } else if roll < 0.60 {
        WeatherCondition::Breeze
    } else if roll < 0.90 {
        WeatherCondition::Gale
    } else {
        WeatherCondition::Storm
    };

    let gustiness = match condition {
        WeatherCondition::Calm => 0.0,
        WeatherCondition::Breeze => 0.1,
        WeatherCondition::Gale => 0.2,
        WeatherCondition::Storm => 0.35,
    };

    WeatherConfig {
        condition,
        direction: rng.gen_range(0.0..360.0),
        veer_rate: rng.gen_range(-2.0..=2.0),
        gustiness,
    }
}
