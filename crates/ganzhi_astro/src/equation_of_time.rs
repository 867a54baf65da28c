//! Equation of time: apparent minus mean solar time.
//!
//! Three-term approximation in the day of the year (Smart, *Textbook on
//! Spherical Astronomy*). The two periodic terms come from the obliquity of
//! the ecliptic (semi-annual) and the eccentricity of the orbit (annual).

use std::f64::consts::TAU;

use crate::error::AstroError;

/// Day of the year on which the approximation's phase is zero (~vernal equinox).
const PHASE_DAY: f64 = 81.0;

/// Equation of time in minutes for a 1-based day of the year.
///
/// Positive means the sundial is ahead of the clock. The output stays
/// within roughly [-15, +17] minutes.
pub fn equation_of_time(day_of_year: u32) -> Result<f64, AstroError> {
    if !(1..=366).contains(&day_of_year) {
        return Err(AstroError::InvalidArgument(format!(
            "day of year must be within [1, 366], got {day_of_year}"
        )));
    }
    let b = TAU * (day_of_year as f64 - PHASE_DAY) / 365.0;
    Ok(9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin())
}
