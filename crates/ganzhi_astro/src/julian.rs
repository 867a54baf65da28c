//! J2000.0 epoch arithmetic on UTC instants.
//!
//! Instants are carried as `chrono::DateTime<Utc>`; the astronomical formulas
//! consume real-valued day counts relative to J2000.0
//! (2000-01-01T12:00:00 UTC). Millisecond resolution is kept throughout so
//! that a boundary instant found by search evaluates identically when fed
//! back in.

use chrono::{DateTime, Datelike, Utc};

/// Milliseconds in one civil day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// J2000.0 (2000-01-01T12:00:00Z) as milliseconds since the Unix epoch.
pub const J2000_UNIX_MILLIS: i64 = 946_728_000_000;

/// Milliseconds elapsed since J2000.0 (negative before the epoch).
pub fn millis_since_j2000(instant: &DateTime<Utc>) -> i64 {
    instant.timestamp_millis() - J2000_UNIX_MILLIS
}

/// Real-valued days elapsed since J2000.0, including the fractional day.
pub fn days_since_j2000(instant: &DateTime<Utc>) -> f64 {
    millis_since_j2000(instant) as f64 / MILLIS_PER_DAY as f64
}

/// Inverse of [`millis_since_j2000`].
///
/// Returns `None` when the result falls outside chrono's representable range.
pub fn instant_from_millis_since_j2000(millis: i64) -> Option<DateTime<Utc>> {
    let unix = millis.checked_add(J2000_UNIX_MILLIS)?;
    DateTime::from_timestamp_millis(unix)
}

/// Inverse of [`days_since_j2000`], rounded to the nearest millisecond.
pub fn instant_from_days_since_j2000(days: f64) -> Option<DateTime<Utc>> {
    if !days.is_finite() {
        return None;
    }
    let millis = (days * MILLIS_PER_DAY as f64).round();
    if millis.abs() > i64::MAX as f64 / 2.0 {
        return None;
    }
    instant_from_millis_since_j2000(millis as i64)
}

/// Day of the year (1-based) of the instant's UTC calendar date.
pub fn day_of_year(instant: &DateTime<Utc>) -> u32 {
    instant.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn j2000_is_zero() {
        let t = utc(2000, 1, 1, 12, 0, 0);
        assert_eq!(millis_since_j2000(&t), 0);
        assert_eq!(days_since_j2000(&t), 0.0);
    }

    #[test]
    fn midnight_before_j2000_is_half_day() {
        let t = utc(2000, 1, 1, 0, 0, 0);
        assert!((days_since_j2000(&t) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn one_year_later() {
        let t = utc(2001, 1, 1, 12, 0, 0);
        // 2000 is a leap year
        assert!((days_since_j2000(&t) - 366.0).abs() < 1e-12);
    }

    #[test]
    fn millis_roundtrip() {
        let t = utc(1987, 6, 15, 3, 45, 12);
        let ms = millis_since_j2000(&t);
        assert_eq!(instant_from_millis_since_j2000(ms), Some(t));
    }

    #[test]
    fn days_roundtrip() {
        let t = utc(2024, 2, 4, 8, 27, 0);
        let d = days_since_j2000(&t);
        assert_eq!(instant_from_days_since_j2000(d), Some(t));
    }

    #[test]
    fn non_finite_days_rejected() {
        assert!(instant_from_days_since_j2000(f64::NAN).is_none());
        assert!(instant_from_days_since_j2000(f64::INFINITY).is_none());
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(&utc(2023, 1, 1, 0, 0, 0)), 1);
        assert_eq!(day_of_year(&utc(2023, 12, 31, 23, 59, 59)), 365);
        assert_eq!(day_of_year(&utc(2024, 12, 31, 0, 0, 0)), 366);
    }
}
