//! Pillar rules: how each of the four sexagenary coordinates is derived.
//!
//! - Day: continuous 60-day count anchored at 1900-01-01 = Jia-Xu (10).
//! - Hour: twelve two-hour brackets starting at 23:00 (Zi), stem by the
//!   "Five Rats" rule from the day stem.
//! - Year: counted from the latest Lichun; 1984 after Lichun = Jia-Zi (0).
//! - Month: branch from the governing Jie term (Lichun opens Yin), stem by
//!   the "Five Tigers" rule from the year stem.

use chrono::{Datelike, NaiveDate};
use ganzhi_cycle::{Branch, CyclicCoordinate, Stem};
use ganzhi_search::SolarTerm;

/// Day pillar index of the reference date 1900-01-01 (Jia-Xu).
pub const DAY_EPOCH_INDEX: i64 = 10;

/// `NaiveDate::num_days_from_ce` of 1900-01-01.
pub const DAY_EPOCH_DAYS_FROM_CE: i32 = 693_596;

/// Gregorian year whose Lichun opens a Jia-Zi year, less a multiple of 60.
const YEAR_EPOCH_OFFSET: i64 = 4;

/// Branch index of the month opened by Lichun (Yin).
const FIRST_MONTH_BRANCH: u8 = 2;

fn combine(stem: Stem, branch: Branch) -> CyclicCoordinate {
    match CyclicCoordinate::from_parts(stem, branch) {
        Some(c) => c,
        // Both rules below keep stem and branch at the same parity.
        None => unreachable!(),
    }
}

/// Day pillar of a calendar date.
pub fn day_pillar(date: NaiveDate) -> CyclicCoordinate {
    let days_passed = date.num_days_from_ce() as i64 - DAY_EPOCH_DAYS_FROM_CE as i64;
    CyclicCoordinate::new(DAY_EPOCH_INDEX + days_passed)
}

/// Two-hour bracket (branch index) of a clock hour: 23:00-00:59 is Zi (0),
/// 01:00-02:59 Chou (1), and so on.
pub const fn hour_bracket(hour: u32) -> u8 {
    (((hour + 1) / 2) % 12) as u8
}

/// "Five Rats": stem of the hour in `bracket` on a day with `day_stem`.
pub const fn five_rats_hour_stem(day_stem: Stem, bracket: u8) -> Stem {
    Stem::from_index((day_stem.index() * 2 + bracket) % 10)
}

/// Hour pillar for `hour` (0..=23) on the day `day`.
///
/// The 23:00 bracket takes its stem from the current calendar day.
pub fn hour_pillar(day: CyclicCoordinate, hour: u32) -> CyclicCoordinate {
    let bracket = hour_bracket(hour);
    combine(
        five_rats_hour_stem(day.stem(), bracket),
        Branch::from_index(bracket),
    )
}

/// Year pillar from the Gregorian year in which the governing Lichun fell.
pub const fn year_pillar(lichun_year: i32) -> CyclicCoordinate {
    CyclicCoordinate::new(lichun_year as i64 - YEAR_EPOCH_OFFSET)
}

/// "Five Tigers": stem of the solar month `month_ordinal` (0 = Yin month)
/// in a year with `year_stem`.
pub const fn five_tigers_month_stem(year_stem: Stem, month_ordinal: u8) -> Stem {
    Stem::from_index((year_stem.index() * 2 + FIRST_MONTH_BRANCH + month_ordinal % 12) % 10)
}

/// Month pillar for the solar month opened by `jie` within `year`.
///
/// A Qi term is mapped to the Jie that opened its month.
pub fn month_pillar(year: CyclicCoordinate, jie: SolarTerm) -> CyclicCoordinate {
    let m = jie.jie().month_ordinal();
    combine(
        five_tigers_month_stem(year.stem(), m),
        Branch::from_index(FIRST_MONTH_BRANCH + m),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_constant_matches_chrono() {
        assert_eq!(date(1900, 1, 1).num_days_from_ce(), DAY_EPOCH_DAYS_FROM_CE);
    }

    #[test]
    fn day_reference_dates() {
        assert_eq!(day_pillar(date(1900, 1, 1)).index(), 10);
        assert_eq!(day_pillar(date(1899, 12, 31)).index(), 9);
        assert_eq!(day_pillar(date(2000, 1, 1)).index(), 54);
        assert_eq!(day_pillar(date(2024, 2, 10)).name(), "Jia-Chen");
        assert_eq!(day_pillar(date(1850, 6, 15)).index(), 33);
    }

    #[test]
    fn consecutive_days_step_by_one() {
        let mut d = date(1999, 12, 1);
        for _ in 0..100 {
            let next = d.succ_opt().unwrap();
            assert_eq!(day_pillar(next), day_pillar(d).shift(1));
            d = next;
        }
    }

    #[test]
    fn hour_brackets() {
        assert_eq!(hour_bracket(23), 0);
        assert_eq!(hour_bracket(0), 0);
        assert_eq!(hour_bracket(1), 1);
        assert_eq!(hour_bracket(2), 1);
        assert_eq!(hour_bracket(11), 6);
        assert_eq!(hour_bracket(12), 6);
        assert_eq!(hour_bracket(22), 11);
    }

    #[test]
    fn five_rats_table() {
        // Zi hour stem for each day stem pair
        let expected = [Stem::Jia, Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren];
        for (i, s) in Stem::all().iter().enumerate() {
            assert_eq!(five_rats_hour_stem(*s, 0), expected[i % 5], "{}", s.name());
        }
    }

    #[test]
    fn five_tigers_table() {
        // Yin month stem for each year stem pair
        let expected = [Stem::Bing, Stem::Wu, Stem::Geng, Stem::Ren, Stem::Jia];
        for (i, s) in Stem::all().iter().enumerate() {
            assert_eq!(five_tigers_month_stem(*s, 0), expected[i % 5], "{}", s.name());
        }
    }

    #[test]
    fn hour_pillar_on_jia_day() {
        let day = CyclicCoordinate::new(10);
        assert_eq!(hour_pillar(day, 0).name(), "Jia-Zi");
        assert_eq!(hour_pillar(day, 11).name(), "Geng-Wu");
        assert_eq!(hour_pillar(day, 21).name(), "Yi-Hai");
        assert_eq!(hour_pillar(day, 23).name(), "Jia-Zi");
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984).index(), 0);
        assert_eq!(year_pillar(2024).name(), "Jia-Chen");
        assert_eq!(year_pillar(1899).name(), "Ji-Hai");
        assert_eq!(year_pillar(4).index(), 0);
        assert_eq!(year_pillar(-56).index(), 0);
    }

    #[test]
    fn month_pillars() {
        let jia_chen = year_pillar(2024);
        assert_eq!(month_pillar(jia_chen, SolarTerm::Lichun).name(), "Bing-Yin");
        assert_eq!(month_pillar(jia_chen, SolarTerm::Yushui).name(), "Bing-Yin");
        assert_eq!(month_pillar(jia_chen, SolarTerm::Jingzhe).name(), "Ding-Mao");
        assert_eq!(month_pillar(jia_chen, SolarTerm::Xiaohan).name(), "Ding-Chou");

        let gui_mao = year_pillar(2023);
        assert_eq!(month_pillar(gui_mao, SolarTerm::Xiaohan).name(), "Yi-Chou");
    }
}
