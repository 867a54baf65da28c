//! Low-precision apparent solar ecliptic longitude.
//!
//! Mean longitude plus the first two terms of the equation of centre
//! (Meeus, *Astronomical Algorithms*, ch. 25, low-accuracy form). Good to
//! about 0.01 deg over several centuries around J2000, which resolves
//! solar-term boundaries to well under a minute of time.

use chrono::{DateTime, Utc};

use crate::input::UtcInstant;
use crate::julian::days_since_j2000;

/// Mean longitude of the Sun at J2000.0, degrees.
const MEAN_LONGITUDE_J2000: f64 = 280.460;
/// Mean longitude rate, degrees per day.
const MEAN_LONGITUDE_RATE: f64 = 0.985_647_4;
/// Mean anomaly at J2000.0, degrees.
const MEAN_ANOMALY_J2000: f64 = 357.528;
/// Mean anomaly rate, degrees per day.
const MEAN_ANOMALY_RATE: f64 = 0.985_600_3;

/// Length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.2422;

/// Mean apparent motion of the Sun along the ecliptic, degrees per day.
pub const MEAN_SOLAR_RATE_DEG_PER_DAY: f64 = 360.0 / TROPICAL_YEAR_DAYS;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Mean longitude L of the Sun, degrees in [0, 360).
pub fn mean_longitude_deg(days_since_j2000: f64) -> f64 {
    normalize_360(MEAN_LONGITUDE_J2000 + MEAN_LONGITUDE_RATE * days_since_j2000)
}

/// Mean anomaly g of the Sun, degrees in [0, 360).
pub fn mean_anomaly_deg(days_since_j2000: f64) -> f64 {
    normalize_360(MEAN_ANOMALY_J2000 + MEAN_ANOMALY_RATE * days_since_j2000)
}

/// Ecliptic longitude from a real-valued day count since J2000.0.
pub fn solar_longitude_from_days(days_since_j2000: f64) -> f64 {
    let l = mean_longitude_deg(days_since_j2000);
    let g = mean_anomaly_deg(days_since_j2000).to_radians();
    normalize_360(l + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
}

/// Apparent ecliptic longitude of the Sun at an instant, degrees in [0, 360).
///
/// Naive inputs are read as UTC; zoned inputs are converted first.
pub fn solar_ecliptic_longitude<T: UtcInstant + ?Sized>(instant: &T) -> f64 {
    let utc: DateTime<Utc> = instant.utc_instant();
    solar_longitude_from_days(days_since_j2000(&utc))
}
