//! Solar-term boundary search.
//!
//! A boundary is the instant the Sun's apparent ecliptic longitude reaches a
//! multiple of 15 deg. The longitude grows monotonically (mod 360), so each
//! search estimates the crossing from the mean solar rate, brackets it
//! within `window_days` either side, and bisects on integer milliseconds.
//!
//! Boundaries are inclusive: a term is active at and after its crossing
//! instant. Results depend only on the input instant and the config.

use chrono::{DateTime, Utc};
use ganzhi_astro::{
    AstroError, MEAN_SOLAR_RATE_DEG_PER_DAY, UtcInstant, instant_from_millis_since_j2000,
    millis_since_j2000, normalize_360,
};
use log::debug;

use crate::error::SearchError;
use crate::search_util::{bisect_crossing, days_to_millis, gap_past, longitude_at};
use crate::solar_term_types::{SolarTerm, SolarTermConfig, SolarTermEvent};

/// Upper bound on events returned by one range search (about 400 years).
const MAX_RANGE_EVENTS: usize = 10_000;

fn event_at(term: SolarTerm, millis: i64) -> Result<SolarTermEvent, SearchError> {
    let instant = instant_from_millis_since_j2000(millis).ok_or_else(|| {
        SearchError::Astro(AstroError::InvalidArgument(
            "solar-term boundary outside representable time range".into(),
        ))
    })?;
    Ok(SolarTermEvent {
        term,
        instant,
        longitude_deg: longitude_at(millis),
    })
}

/// Latest crossing of `target_deg` at or before `t_ms`.
fn find_crossing_at_or_before(
    t_ms: i64,
    target_deg: f64,
    config: &SolarTermConfig,
) -> Result<i64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let past = normalize_360(longitude_at(t_ms) - target_deg);
    let estimate = t_ms - days_to_millis(past / MEAN_SOLAR_RATE_DEG_PER_DAY);
    let window = days_to_millis(config.window_days);
    let hi = (estimate + window).min(t_ms);
    let lo = estimate - window;

    if gap_past(lo, target_deg) >= 0.0 || gap_past(hi, target_deg) < 0.0 {
        return Err(SearchError::ConvergenceFailure(
            "search window does not bracket the previous crossing",
        ));
    }
    Ok(bisect_crossing(lo, hi, target_deg, config))
}

/// Earliest crossing of `target_deg` strictly after `t_ms`.
fn find_crossing_after(
    t_ms: i64,
    target_deg: f64,
    config: &SolarTermConfig,
) -> Result<i64, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let mut ahead = normalize_360(target_deg - longitude_at(t_ms));
    if ahead == 0.0 {
        // Sitting exactly on the boundary: the next one is a year out.
        ahead = 360.0;
    }
    let estimate = t_ms + days_to_millis(ahead / MEAN_SOLAR_RATE_DEG_PER_DAY);
    let window = days_to_millis(config.window_days);
    let lo = (estimate - window).max(t_ms);
    let hi = estimate + window;

    if gap_past(lo, target_deg) >= 0.0 || gap_past(hi, target_deg) < 0.0 {
        return Err(SearchError::ConvergenceFailure(
            "search window does not bracket the next crossing",
        ));
    }
    Ok(bisect_crossing(lo, hi, target_deg, config))
}

/// Term active at `t_ms` under the crossing predicate used by bisection.
fn term_at_millis(t_ms: i64) -> SolarTerm {
    let term = SolarTerm::from_longitude(longitude_at(t_ms));
    if gap_past(t_ms, term.longitude_deg()) < 0.0 {
        term.previous()
    } else if gap_past(t_ms, term.next().longitude_deg()) >= 0.0 {
        term.next()
    } else {
        term
    }
}

/// The term whose sector contains the Sun at `instant` (no search).
pub fn solar_term_at<T: UtcInstant + ?Sized>(instant: &T) -> SolarTerm {
    term_at_millis(millis_since_j2000(&instant.utc_instant()))
}

/// Latest boundary of a specific term at or before `instant`.
pub fn prev_specific_term<T: UtcInstant + ?Sized>(
    instant: &T,
    term: SolarTerm,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    let t_ms = millis_since_j2000(&instant.utc_instant());
    let ms = find_crossing_at_or_before(t_ms, term.longitude_deg(), config)?;
    let event = event_at(term, ms)?;
    debug!("prev {} at {}", term.name(), event.instant);
    Ok(event)
}

/// Next boundary of a specific term strictly after `instant`.
pub fn next_specific_term<T: UtcInstant + ?Sized>(
    instant: &T,
    term: SolarTerm,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    let t_ms = millis_since_j2000(&instant.utc_instant());
    let ms = find_crossing_after(t_ms, term.longitude_deg(), config)?;
    let event = event_at(term, ms)?;
    debug!("next {} at {}", term.name(), event.instant);
    Ok(event)
}

/// Latest boundary of any of the 24 terms at or before `instant`.
pub fn prev_solar_term<T: UtcInstant + ?Sized>(
    instant: &T,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    prev_specific_term(instant, solar_term_at(instant), config)
}

/// Next boundary of any of the 24 terms strictly after `instant`.
pub fn next_solar_term<T: UtcInstant + ?Sized>(
    instant: &T,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    next_specific_term(instant, solar_term_at(instant).next(), config)
}

/// The Jie term governing the solar month at `instant`: the latest
/// month-opening boundary at or before it.
pub fn active_jie_term<T: UtcInstant + ?Sized>(
    instant: &T,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    prev_specific_term(instant, solar_term_at(instant).jie(), config)
}

/// Latest Lichun (sexagenary new year) at or before `instant`.
pub fn prev_lichun<T: UtcInstant + ?Sized>(
    instant: &T,
    config: &SolarTermConfig,
) -> Result<SolarTermEvent, SearchError> {
    prev_specific_term(instant, SolarTerm::Lichun, config)
}

/// All term boundaries in the half-open range `[start, end)`, in time order.
pub fn search_solar_terms<S, E>(
    start: &S,
    end: &E,
    config: &SolarTermConfig,
) -> Result<Vec<SolarTermEvent>, SearchError>
where
    S: UtcInstant + ?Sized,
    E: UtcInstant + ?Sized,
{
    config.validate().map_err(SearchError::InvalidConfig)?;
    let start: DateTime<Utc> = start.utc_instant();
    let end: DateTime<Utc> = end.utc_instant();
    let mut events = Vec::new();
    if end <= start {
        return Ok(events);
    }

    let start_ms = millis_since_j2000(&start);
    let end_ms = millis_since_j2000(&end);
    // A boundary exactly at `start` belongs to the range.
    let mut cursor = start_ms - 1;
    let mut term = term_at_millis(cursor).next();
    loop {
        let ms = find_crossing_after(cursor, term.longitude_deg(), config)?;
        if ms >= end_ms {
            break;
        }
        if events.len() >= MAX_RANGE_EVENTS {
            return Err(SearchError::InvalidConfig("search range too long"));
        }
        events.push(event_at(term, ms)?);
        cursor = ms;
        term = term.next();
    }
    debug!("{} solar terms in [{start}, {end})", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn config() -> SolarTermConfig {
        SolarTermConfig::standard()
    }

    #[test]
    fn lichun_2024_on_february_fourth() {
        // Lichun 2024: 2024-02-04 08:27 UTC
        let ev = prev_lichun(&utc(2024, 3, 1, 0, 0, 0), &config()).unwrap();
        assert_eq!(ev.term, SolarTerm::Lichun);
        let expected = utc(2024, 2, 4, 8, 27, 0);
        let off = (ev.instant - expected).num_minutes().abs();
        assert!(off <= 20, "off by {off} min: {}", ev.instant);
    }

    #[test]
    fn boundary_is_inclusive() {
        let ev = prev_lichun(&utc(2024, 3, 1, 0, 0, 0), &config()).unwrap();
        let again = prev_lichun(&ev.instant, &config()).unwrap();
        assert_eq!(again.instant, ev.instant);
        assert_eq!(solar_term_at(&ev.instant), SolarTerm::Lichun);

        let just_before = ev.instant - Duration::milliseconds(1);
        assert_eq!(solar_term_at(&just_before), SolarTerm::Dahan);
        let earlier = prev_lichun(&just_before, &config()).unwrap();
        assert!(ev.instant - earlier.instant > Duration::days(360));
    }

    #[test]
    fn next_is_strictly_after() {
        let ev = prev_lichun(&utc(2024, 3, 1, 0, 0, 0), &config()).unwrap();
        let next = next_specific_term(&ev.instant, SolarTerm::Lichun, &config()).unwrap();
        let days = (next.instant - ev.instant).num_hours() as f64 / 24.0;
        assert!((days - 365.24).abs() < 1.0, "{days}");
    }

    #[test]
    fn next_and_prev_any_term() {
        let t = utc(2024, 6, 1, 0, 0, 0);
        let prev = prev_solar_term(&t, &config()).unwrap();
        let next = next_solar_term(&t, &config()).unwrap();
        assert_eq!(prev.term, SolarTerm::Xiaoman);
        assert_eq!(next.term, SolarTerm::Mangzhong);
        assert!(prev.instant <= t && t < next.instant);
    }

    #[test]
    fn active_jie_skips_qi() {
        // Early March 2024 is past Yushui (Feb 19) but before Jingzhe (Mar 5)
        let ev = active_jie_term(&utc(2024, 3, 1, 0, 0, 0), &config()).unwrap();
        assert_eq!(ev.term, SolarTerm::Lichun);
    }

    #[test]
    fn invalid_config_reported() {
        let mut c = config();
        c.max_iterations = 0;
        assert!(matches!(
            prev_lichun(&utc(2024, 3, 1, 0, 0, 0), &c),
            Err(SearchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn empty_range() {
        let t = utc(2024, 1, 1, 0, 0, 0);
        assert!(search_solar_terms(&t, &t, &config()).unwrap().is_empty());
    }
}
