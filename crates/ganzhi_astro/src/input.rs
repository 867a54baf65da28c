//! Normalization of caller-supplied timestamps and longitudes.
//!
//! A naive timestamp is taken to be UTC already; an offset-bearing one is
//! converted to UTC before any computation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::error::AstroError;

/// Naive formats accepted by [`parse_timestamp`], tried in order.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Anything that denotes a single UTC instant.
pub trait UtcInstant {
    /// The instant expressed in UTC.
    fn utc_instant(&self) -> DateTime<Utc>;
}

impl UtcInstant for NaiveDateTime {
    fn utc_instant(&self) -> DateTime<Utc> {
        self.and_utc()
    }
}

impl<Tz: TimeZone> UtcInstant for DateTime<Tz> {
    fn utc_instant(&self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// Parse an ISO-8601 / RFC 3339 timestamp into a UTC instant.
///
/// Accepts `2024-02-04T08:27:00Z`, `2024-02-04T16:27:00+08:00`, naive
/// `2024-02-04T08:27:00[.fff]` (read as UTC), the space-separated variants,
/// minute precision, and a bare `2024-02-04` (midnight UTC).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, AstroError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AstroError::InvalidArgument("empty timestamp".into()));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.utc_instant());
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.utc_instant());
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.utc_instant());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.utc_instant());
        }
    }
    Err(AstroError::InvalidArgument(format!("unparseable timestamp: {s}")))
}

/// Check that a longitude is finite and within [-180, 180] degrees.
pub fn validate_longitude(longitude_deg: f64) -> Result<f64, AstroError> {
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(AstroError::InvalidArgument(format!(
            "longitude must be within [-180, 180] degrees, got {longitude_deg}"
        )));
    }
    Ok(longitude_deg)
}
