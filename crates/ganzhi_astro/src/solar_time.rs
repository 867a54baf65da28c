//! Local mean and apparent (true) solar time.
//!
//! The Earth turns one degree of longitude every four minutes, so an
//! observer's mean solar time leads UTC by `longitude × 4` minutes. Adding
//! the equation of time gives the apparent solar time a sundial would show.

use chrono::{NaiveDateTime, TimeDelta};

use crate::equation_of_time::equation_of_time;
use crate::error::AstroError;
use crate::input::{UtcInstant, validate_longitude};
use crate::julian::day_of_year;

/// Minutes of time per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Offset of local mean time from UTC in minutes (east positive).
pub fn longitude_offset_minutes(longitude_deg: f64) -> f64 {
    longitude_deg * MINUTES_PER_DEGREE
}

/// Total offset of apparent solar time from UTC in minutes.
///
/// The equation of time is evaluated for the UTC calendar date of `instant`.
pub fn solar_time_offset_minutes<T: UtcInstant + ?Sized>(
    instant: &T,
    longitude_deg: f64,
) -> Result<f64, AstroError> {
    let longitude_deg = validate_longitude(longitude_deg)?;
    let utc = instant.utc_instant();
    let eot = equation_of_time(day_of_year(&utc))?;
    Ok(longitude_offset_minutes(longitude_deg) + eot)
}

/// Local mean solar time: UTC shifted by the longitude offset only.
pub fn local_mean_time<T: UtcInstant + ?Sized>(
    instant: &T,
    longitude_deg: f64,
) -> Result<NaiveDateTime, AstroError> {
    let longitude_deg = validate_longitude(longitude_deg)?;
    shift_minutes(instant, longitude_offset_minutes(longitude_deg))
}

/// Local apparent solar time at `longitude_deg` (east positive).
///
/// The result carries no zone: it is the wall reading of a sundial at the
/// observer's meridian.
pub fn true_solar_time<T: UtcInstant + ?Sized>(
    instant: &T,
    longitude_deg: f64,
) -> Result<NaiveDateTime, AstroError> {
    let offset = solar_time_offset_minutes(instant, longitude_deg)?;
    shift_minutes(instant, offset)
}

fn shift_minutes<T: UtcInstant + ?Sized>(
    instant: &T,
    minutes: f64,
) -> Result<NaiveDateTime, AstroError> {
    let millis = (minutes * 60_000.0).round() as i64;
    instant
        .utc_instant()
        .naive_utc()
        .checked_add_signed(TimeDelta::milliseconds(millis))
        .ok_or_else(|| AstroError::InvalidArgument("solar time out of range".into()))
}
