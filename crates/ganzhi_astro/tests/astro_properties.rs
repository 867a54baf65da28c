//! Property checks for the astronomical corrector over its full domain.

use chrono::{Duration, TimeZone, Utc};
use ganzhi_astro::{
    AstroError, TROPICAL_YEAR_DAYS, equation_of_time, normalize_360, solar_ecliptic_longitude,
    true_solar_time,
};

fn angular_gap(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { 360.0 - d } else { d }
}

#[test]
fn equation_of_time_bounded_for_every_day() {
    for d in 1..=366 {
        let e = equation_of_time(d).unwrap();
        assert!((-20.0..=20.0).contains(&e), "day {d}: {e}");
    }
}

#[test]
fn equation_of_time_outside_domain() {
    for d in [0, 367, 1000, u32::MAX] {
        assert!(matches!(
            equation_of_time(d),
            Err(AstroError::InvalidArgument(_))
        ));
    }
}

#[test]
fn solar_longitude_periodic_over_tropical_year() {
    let year_ms = (TROPICAL_YEAR_DAYS * 86_400_000.0).round() as i64;
    let mut t = Utc.with_ymd_and_hms(1950, 1, 1, 0, 0, 0).unwrap();
    for _ in 0..150 {
        let later = t + Duration::milliseconds(year_ms);
        let gap = angular_gap(solar_ecliptic_longitude(&t), solar_ecliptic_longitude(&later));
        assert!(gap < 1.0, "{t}: gap {gap}");
        t += Duration::days(127);
    }
}

#[test]
fn solar_longitude_increases_day_to_day() {
    let mut t = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let mut prev = solar_ecliptic_longitude(&t);
    for _ in 0..800 {
        t += Duration::days(1);
        let cur = solar_ecliptic_longitude(&t);
        let step = normalize_360(cur - prev);
        assert!(step > 0.9 && step < 1.1, "{t}: step {step}");
        prev = cur;
    }
}

#[test]
fn true_solar_time_never_strays_beyond_bounds() {
    // |offset| <= 180*4 + 20 minutes for any valid longitude
    let t = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    for lon in [-180.0, -97.5, -0.5, 0.0, 13.4, 116.4, 180.0] {
        let solar = true_solar_time(&t, lon).unwrap();
        let minutes = (solar - t.naive_utc()).num_seconds() as f64 / 60.0;
        assert!(minutes.abs() <= 740.0, "lon {lon}: {minutes}");
        assert!((minutes - lon * 4.0).abs() <= 20.0, "lon {lon}: {minutes}");
    }
}
