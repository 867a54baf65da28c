//! Shared bracketing and bisection helpers.
//!
//! Time is carried as integer milliseconds since J2000.0 so that the
//! instant a search returns evaluates to exactly the same longitude when a
//! caller feeds it back in.

use ganzhi_astro::{MILLIS_PER_DAY, normalize_360, solar_longitude_from_days};
use log::trace;

use crate::solar_term_types::SolarTermConfig;

/// Normalize an angle to [-180, 180) degrees.
pub(crate) fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r >= 180.0 { r - 360.0 } else { r }
}

/// Solar longitude at `millis` since J2000.0.
pub(crate) fn longitude_at(millis: i64) -> f64 {
    solar_longitude_from_days(millis as f64 / MILLIS_PER_DAY as f64)
}

/// Signed angle by which the Sun has passed `target_deg`: negative before
/// the crossing, zero or positive from the crossing on.
pub(crate) fn gap_past(millis: i64, target_deg: f64) -> f64 {
    normalize_to_pm180(longitude_at(millis) - target_deg)
}

/// Convert a span of days to whole milliseconds.
pub(crate) fn days_to_millis(days: f64) -> i64 {
    (days * MILLIS_PER_DAY as f64).round() as i64
}

/// Bisect a bracket with `gap_past(lo) < 0 <= gap_past(hi)`.
///
/// Returns the upper end of the final bracket: the earliest examined
/// millisecond at which the Sun has reached `target_deg`.
pub(crate) fn bisect_crossing(
    mut lo: i64,
    mut hi: i64,
    target_deg: f64,
    config: &SolarTermConfig,
) -> i64 {
    for iteration in 0..config.max_iterations {
        if hi - lo <= config.resolution_ms {
            break;
        }
        let mid = lo + (hi - lo) / 2;
        if gap_past(mid, target_deg) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
        trace!("bisect {target_deg} deg: iteration {iteration}, bracket {} ms", hi - lo);
    }
    hi
}
