//! Simulation constants and default tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Ship handling defaults ---

/// Heading change limit in degrees per second.
pub const DEFAULT_TURN_SPEED: f64 = 1.0;

/// Speed change limit per unit of wind speed per second.
pub const DEFAULT_ACCELERATION: f64 = 1.0;

/// Speed at or above which a ship capsizes.
pub const DEFAULT_MAX_SPEED: f64 = 1.0;

/// Seconds a gun battery needs to reload after firing.
pub const DEFAULT_RECOIL: f64 = 1.0;

// --- Wind-relative speed buckets ---
// Thresholds are the absolute angle in degrees between wind direction and heading.

/// Below this angle the ship is in irons and makes no way.
pub const IN_IRONS_LIMIT_DEG: f64 = 45.0;

/// Upper bound of the close-hauled bucket.
pub const CLOSE_HAULED_LIMIT_DEG: f64 = 65.0;

/// Upper bound of the beam-reach bucket.
pub const BEAM_REACH_LIMIT_DEG: f64 = 115.0;

/// Upper bound of the broad-reach bucket. Anything beyond is running downwind.
pub const BROAD_REACH_LIMIT_DEG: f64 = 160.0;

pub const CLOSE_HAULED_FACTOR: f64 = 0.4;
pub const BEAM_REACH_FACTOR: f64 = 0.6;
pub const BROAD_REACH_FACTOR: f64 = 1.0;
pub const RUNNING_FACTOR: f64 = 0.8;

// --- Weather ---

/// Wind direction sentinel meaning "no direction set".
pub const NO_WIND_DIRECTION: f64 = -1.0;

/// Wind speeds for each weather condition.
pub const WIND_SPEED_CALM: f64 = 0.0;
pub const WIND_SPEED_BREEZE: f64 = 0.5;
pub const WIND_SPEED_GALE: f64 = 1.0;
pub const WIND_SPEED_STORM: f64 = 1.6;

/// Default veer rate of the wind (degrees per second).
pub const DEFAULT_WIND_VEER_RATE: f64 = 0.0;

/// Default gust amplitude as a fraction of the base wind speed.
pub const DEFAULT_GUSTINESS: f64 = 0.0;

// --- Fleet setup ---

/// Ships spawned by the fleet factory are placed within this radius of the origin.
pub const FLEET_SPAWN_RADIUS: f64 = 500.0;

/// Hull points of a freshly launched ship.
pub const DEFAULT_SHIP_HEALTH: f64 = 100.0;
