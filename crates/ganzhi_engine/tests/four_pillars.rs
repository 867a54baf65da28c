//! Integration tests for Four Pillars conversion against reference dates.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use ganzhi_engine::{
    EngineConfig, ErrorKind, SolarTerm, SolarTermConfig, TemporalCoordinateEngine,
    get_coordinates, get_coordinates_str,
};
use ganzhi_search::{prev_lichun, prev_specific_term};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn reference_day_civil_midnight() {
    let set = get_coordinates(&utc(1900, 1, 1, 0, 0), 0.0, false).unwrap();
    assert_eq!(set.day.index(), 10);
    assert_eq!(set.day.name(), "Jia-Xu");
    assert_eq!(set.hour.name(), "Jia-Zi");
    // Before Lichun 1900: still the Ji-Hai year, Bing-Zi month
    assert_eq!(set.year.name(), "Ji-Hai");
    assert_eq!(set.month.name(), "Bing-Zi");
    assert_eq!(set.metadata.solar_term.term(), SolarTerm::Daxue);
}

#[test]
fn reference_day_precision_noon() {
    let set = get_coordinates(&utc(1900, 1, 1, 12, 0), 0.0, true).unwrap();
    assert_eq!(set.day.index(), 10);
    // EoT near -3.7 min puts the sundial just before noon
    assert_eq!(set.metadata.solar_time.hour(), 11);
    assert_eq!(set.hour.name(), "Geng-Wu");
}

#[test]
fn reference_midnight_in_precision_mode_is_previous_solar_day() {
    let set = get_coordinates(&utc(1900, 1, 1, 0, 0), 0.0, true).unwrap();
    let expected = NaiveDate::from_ymd_opt(1899, 12, 31).unwrap();
    assert_eq!(set.metadata.solar_time.date(), expected);
    assert_eq!(set.day.index(), 9);
}

#[test]
fn millennium() {
    let set = get_coordinates(&utc(2000, 1, 1, 12, 0), 0.0, false).unwrap();
    assert_eq!(set.day.index(), 54);
    assert_eq!(set.hour.name(), "Wu-Wu");
    assert_eq!(set.year.name(), "Ji-Mao");
    assert_eq!(set.month.name(), "Bing-Zi");
}

#[test]
fn lunar_new_year_2024() {
    let set = get_coordinates(&utc(2024, 2, 10, 12, 0), 0.0, false).unwrap();
    assert_eq!(set.year.index(), 40);
    assert_eq!(set.month.name(), "Bing-Yin");
    assert_eq!(set.day.name(), "Jia-Chen");
    assert_eq!(set.metadata.solar_term.term(), SolarTerm::Lichun);
}

#[test]
fn jia_zi_year_1984() {
    let set = get_coordinates(&utc(1984, 6, 1, 0, 0), 0.0, false).unwrap();
    assert_eq!(set.year.index(), 0);
}

#[test]
fn year_and_month_flip_at_lichun() {
    let lichun = prev_lichun(&utc(2024, 3, 1, 0, 0), &SolarTermConfig::standard()).unwrap();

    let at = get_coordinates(&lichun.instant, 0.0, false).unwrap();
    assert_eq!(at.year.name(), "Jia-Chen");
    assert_eq!(at.month.name(), "Bing-Yin");
    assert_eq!(at.metadata.solar_term.started_at, lichun.instant);

    let before = lichun.instant - Duration::milliseconds(1);
    let set = get_coordinates(&before, 0.0, false).unwrap();
    assert_eq!(set.year.name(), "Gui-Mao");
    assert_eq!(set.month.name(), "Yi-Chou");
    assert_eq!(set.metadata.solar_term.term(), SolarTerm::Xiaohan);
}

#[test]
fn month_flips_at_jingzhe() {
    let jingzhe = prev_specific_term(
        &utc(2024, 3, 20, 0, 0),
        SolarTerm::Jingzhe,
        &SolarTermConfig::standard(),
    )
    .unwrap();

    let at = get_coordinates(&jingzhe.instant, 0.0, false).unwrap();
    assert_eq!(at.year.name(), "Jia-Chen");
    assert_eq!(at.month.name(), "Ding-Mao");
    assert_eq!(at.metadata.solar_term.term(), SolarTerm::Jingzhe);

    let before = jingzhe.instant - Duration::milliseconds(1);
    let set = get_coordinates(&before, 0.0, false).unwrap();
    assert_eq!(set.year.name(), "Jia-Chen");
    assert_eq!(set.month.name(), "Bing-Yin");
    assert_eq!(set.metadata.solar_term.term(), SolarTerm::Lichun);
}

#[test]
fn year_and_month_ignore_precision_mode() {
    let t = utc(2024, 2, 4, 8, 0);
    for lon in [-150.0, 0.0, 150.0] {
        let civil = get_coordinates(&t, lon, false).unwrap();
        let solar = get_coordinates(&t, lon, true).unwrap();
        assert_eq!(civil.year, solar.year);
        assert_eq!(civil.month, solar.month);
    }
}

#[test]
fn hour_branch_changes_only_at_odd_hours() {
    let day = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
    let mut prev = None;
    for h in 0..24 {
        let t = day.and_hms_opt(h, 0, 0).unwrap();
        let set = get_coordinates(&t, 0.0, false).unwrap();
        if let Some(p) = prev {
            let changed = set.hour.branch() != p;
            assert_eq!(changed, h % 2 == 1, "hour {h}");
        }
        prev = Some(set.hour.branch());
    }
}

#[test]
fn deterministic() {
    let t = utc(2031, 11, 3, 17, 45);
    let a = get_coordinates(&t, 116.4, true).unwrap();
    let b = get_coordinates(&t, 116.4, true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
}

#[test]
fn zoned_input_matches_utc() {
    let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
    let zoned = beijing.with_ymd_and_hms(2024, 2, 10, 20, 0, 0).unwrap();
    let a = get_coordinates(&zoned, 116.4, true).unwrap();
    let b = get_coordinates(&utc(2024, 2, 10, 12, 0), 116.4, true).unwrap();
    assert_eq!(a, b);
}

#[test]
fn string_input() {
    let a = get_coordinates_str("2024-02-10T20:00:00+08:00", 0.0, false).unwrap();
    let b = get_coordinates_str("2024-02-10 12:00:00", 0.0, false).unwrap();
    assert_eq!(a, b);
    let c = get_coordinates_str("2024-02-10", 0.0, false).unwrap();
    assert_eq!(c.hour.branch_index(), 0);
}

#[test]
fn invalid_inputs() {
    let t = utc(2024, 2, 10, 12, 0);
    for lon in [180.5, -181.0, f64::NAN, f64::INFINITY] {
        let err = get_coordinates(&t, lon, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    let err = get_coordinates_str("yesterday", 0.0, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn narrow_window_reports_convergence_failure() {
    let mut config = EngineConfig::civil();
    config.solar_terms.window_days = 0.01;
    let engine = TemporalCoordinateEngine::new(config).unwrap();
    let err = engine.get_coordinates(&utc(2024, 3, 1, 0, 0), 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConvergenceFailure);
}

#[test]
fn json_record_shape() {
    let set = get_coordinates(&utc(2024, 2, 10, 12, 0), 0.0, false).unwrap();
    let v: serde_json::Value = serde_json::from_str(&set.to_json().unwrap()).unwrap();
    assert_eq!(v["metadata"]["precision_mode"], false);
    assert_eq!(v["metadata"]["longitude"], 0.0);
    assert_eq!(v["metadata"]["solar_term"]["name"], "Lichun");
    assert_eq!(v["metadata"]["solar_term"]["index"], 0);
    assert_eq!(v["coordinates"]["year"]["index"], 40);
    assert_eq!(v["coordinates"]["year"]["stem"], "Jia");
    assert_eq!(v["coordinates"]["day"]["branch"], "Chen");
    assert!(v["metadata"]["civil_utc"].as_str().unwrap().starts_with("2024-02-10T12:00:00"));
}
