//! Astronomical corrections from civil time to apparent solar time.
//!
//! This crate provides:
//! - J2000.0 day counts on UTC instants
//! - Equation of time (three-term approximation)
//! - Low-precision apparent solar ecliptic longitude
//! - Local mean and true (apparent) solar time
//! - Timestamp and longitude input normalization
//!
//! Every function is pure; accuracy targets calendar boundary work
//! (sub-minute), not navigation-grade ephemerides.

pub mod equation_of_time;
pub mod error;
pub mod input;
pub mod julian;
pub mod solar_longitude;
pub mod solar_time;

pub use equation_of_time::equation_of_time;
pub use error::AstroError;
pub use input::{UtcInstant, parse_timestamp, validate_longitude};
pub use julian::{
    J2000_UNIX_MILLIS, MILLIS_PER_DAY, day_of_year, days_since_j2000,
    instant_from_days_since_j2000, instant_from_millis_since_j2000, millis_since_j2000,
};
pub use solar_longitude::{
    MEAN_SOLAR_RATE_DEG_PER_DAY, TROPICAL_YEAR_DAYS, mean_anomaly_deg, mean_longitude_deg,
    normalize_360, solar_ecliptic_longitude, solar_longitude_from_days,
};
pub use solar_time::{
    MINUTES_PER_DEGREE, local_mean_time, longitude_offset_minutes, solar_time_offset_minutes,
    true_solar_time,
};
