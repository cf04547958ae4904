//! Sailing physics.
//!
//! Pure functions for turning, wind-relative speed, acceleration and
//! displacement. No ECS dependency, operates on plain values. All angles
//! are degrees.

use glam::DVec2;

use broadside_core::constants::*;
use broadside_core::enums::HandlingModel;
use broadside_core::types::Wind;

/// Map any angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Heading after one tick of turning toward `desired`, limited to `max_turn` degrees.
///
/// `Classic` only wraps differences above 180° and only limits positive turns,
/// so a large negative difference is applied in a single tick.
pub fn turn_toward(heading: f64, desired: f64, max_turn: f64, handling: HandlingModel) -> f64 {
    if heading == desired {
        return heading;
    }

    let mut dif = desired - heading;
    match handling {
        HandlingModel::Classic => {
            if dif > 180.0 {
                dif -= 360.0;
            }
            if dif > max_turn {
                dif = max_turn;
            }
        }
        HandlingModel::Balanced => {
            dif = dif.rem_euclid(360.0);
            if dif > 180.0 {
                dif -= 360.0;
            }
            dif = dif.max(-max_turn).min(max_turn);
        }
    }

    normalize_degrees(heading + dif)
}

/// Absolute angle between the wind direction and a heading, in [0, 180].
///
/// Both inputs must already lie in [0, 360).
pub fn wind_relative_angle(wind_direction: f64, heading: f64) -> f64 {
    let mut dif = wind_direction - heading;
    if dif > 180.0 {
        dif -= 360.0;
    } else if dif < -180.0 {
        dif += 360.0;
    }
    let dif = dif.abs();

    assert!(
        (0.0..=180.0).contains(&dif),
        "wind-relative angle {dif} outside [0, 180] (wind {wind_direction}, heading {heading})"
    );
    dif
}

/// Speed multiplier for a wind-relative angle.
pub fn wind_factor(relative_angle: f64) -> f64 {
    if relative_angle < IN_IRONS_LIMIT_DEG {
        0.0
    } else if relative_angle < CLOSE_HAULED_LIMIT_DEG {
        CLOSE_HAULED_FACTOR
    } else if relative_angle < BEAM_REACH_LIMIT_DEG {
        BEAM_REACH_FACTOR
    } else if relative_angle < BROAD_REACH_LIMIT_DEG {
        BROAD_REACH_FACTOR
    } else {
        RUNNING_FACTOR
    }
}

/// Scale `speed` by the point of sail of `heading` relative to the wind.
/// Wind without a direction leaves the speed untouched.
pub fn apply_wind_physics(speed: f64, heading: f64, wind: Wind) -> f64 {
    if !wind.has_direction() {
        return speed;
    }
    speed * wind_factor(wind_relative_angle(wind.direction, heading))
}

/// Speed after one tick of acceleration limited to `max_change`.
///
/// `Classic` pushes by the clamped `speed - target`, which drives the ship
/// away from the target; `Balanced` converges on it.
pub fn approach_speed(speed: f64, target: f64, max_change: f64, handling: HandlingModel) -> f64 {
    if speed == target {
        return speed;
    }

    let dif = match handling {
        HandlingModel::Classic => speed - target,
        HandlingModel::Balanced => target - speed,
    };
    speed + dif.max(-max_change).min(max_change)
}

/// Chart displacement of one tick. Heading 0° moves along +y.
pub fn displacement(heading: f64, speed: f64) -> DVec2 {
    DVec2::from_angle((heading + 90.0).to_radians()) * speed
}
