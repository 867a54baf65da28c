//! Types for solar-term search.

use chrono::{DateTime, Utc};
use ganzhi_astro::normalize_360;
use serde::Serialize;

/// Ecliptic longitude of Lichun, the first term of the cycle.
pub const LICHUN_LONGITUDE_DEG: f64 = 315.0;

/// Span of one solar term in degrees of solar longitude.
pub const TERM_SPAN_DEG: f64 = 15.0;

/// Span of one solar month (Jie to Jie) in degrees.
pub const MONTH_SPAN_DEG: f64 = 30.0;

/// The 24 solar terms, starting from Lichun (315 deg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SolarTerm {
    Lichun,
    Yushui,
    Jingzhe,
    Chunfen,
    Qingming,
    Guyu,
    Lixia,
    Xiaoman,
    Mangzhong,
    Xiazhi,
    Xiaoshu,
    Dashu,
    Liqiu,
    Chushu,
    Bailu,
    Qiufen,
    Hanlu,
    Shuangjiang,
    Lidong,
    Xiaoxue,
    Daxue,
    Dongzhi,
    Xiaohan,
    Dahan,
}

/// All 24 terms in order (0 = Lichun, 23 = Dahan).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Lichun,
    SolarTerm::Yushui,
    SolarTerm::Jingzhe,
    SolarTerm::Chunfen,
    SolarTerm::Qingming,
    SolarTerm::Guyu,
    SolarTerm::Lixia,
    SolarTerm::Xiaoman,
    SolarTerm::Mangzhong,
    SolarTerm::Xiazhi,
    SolarTerm::Xiaoshu,
    SolarTerm::Dashu,
    SolarTerm::Liqiu,
    SolarTerm::Chushu,
    SolarTerm::Bailu,
    SolarTerm::Qiufen,
    SolarTerm::Hanlu,
    SolarTerm::Shuangjiang,
    SolarTerm::Lidong,
    SolarTerm::Xiaoxue,
    SolarTerm::Daxue,
    SolarTerm::Dongzhi,
    SolarTerm::Xiaohan,
    SolarTerm::Dahan,
];

const TERM_NAMES: [&str; 24] = [
    "Lichun",
    "Yushui",
    "Jingzhe",
    "Chunfen",
    "Qingming",
    "Guyu",
    "Lixia",
    "Xiaoman",
    "Mangzhong",
    "Xiazhi",
    "Xiaoshu",
    "Dashu",
    "Liqiu",
    "Chushu",
    "Bailu",
    "Qiufen",
    "Hanlu",
    "Shuangjiang",
    "Lidong",
    "Xiaoxue",
    "Daxue",
    "Dongzhi",
    "Xiaohan",
    "Dahan",
];

const TERM_GLYPHS: [&str; 24] = [
    "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑",
    "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒",
];

/// Jie terms open a solar month; Qi terms fall mid-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTermKind {
    Jie,
    Qi,
}

impl SolarTerm {
    /// Term at a position, reduced modulo 24.
    pub const fn from_index(index: u8) -> Self {
        ALL_SOLAR_TERMS[(index % 24) as usize]
    }

    /// The term whose 15-degree sector contains `longitude_deg`.
    ///
    /// Sectors are closed at their start: a longitude exactly on a boundary
    /// belongs to the term that begins there.
    pub fn from_longitude(longitude_deg: f64) -> Self {
        let past_lichun = normalize_360(longitude_deg - LICHUN_LONGITUDE_DEG);
        let idx = ((past_lichun / TERM_SPAN_DEG).floor() as u8).min(23);
        ALL_SOLAR_TERMS[idx as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index() as usize]
    }

    /// Chinese name.
    pub const fn glyphs(self) -> &'static str {
        TERM_GLYPHS[self.index() as usize]
    }

    /// 0-based index (Lichun=0 .. Dahan=23).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Solar ecliptic longitude at which the term begins, in [0, 360).
    pub fn longitude_deg(self) -> f64 {
        normalize_360(LICHUN_LONGITUDE_DEG + TERM_SPAN_DEG * self.index() as f64)
    }

    pub const fn kind(self) -> SolarTermKind {
        if self.index() % 2 == 0 {
            SolarTermKind::Jie
        } else {
            SolarTermKind::Qi
        }
    }

    pub const fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// The Jie term that opened the solar month containing this term.
    pub const fn jie(self) -> SolarTerm {
        Self::from_index(self.index() & !1)
    }

    /// Solar month ordinal: 0 for the Lichun month (Yin) .. 11 for the Xiaohan month (Chou).
    pub const fn month_ordinal(self) -> u8 {
        self.index() / 2
    }

    pub const fn next(self) -> SolarTerm {
        Self::from_index(self.index() + 1)
    }

    pub const fn previous(self) -> SolarTerm {
        Self::from_index(self.index() + 23)
    }

    /// All 24 terms in order.
    pub const fn all() -> &'static [SolarTerm; 24] {
        &ALL_SOLAR_TERMS
    }
}

/// A located solar-term boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    /// The term that begins at this instant.
    pub term: SolarTerm,
    /// First millisecond (UTC) at which the Sun has reached the term longitude.
    pub instant: DateTime<Utc>,
    /// Solar ecliptic longitude at `instant`, degrees [0, 360).
    pub longitude_deg: f64,
}

/// Configuration for solar-term boundary search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTermConfig {
    /// Half-width in days of the bracket placed around the mean-rate estimate.
    pub window_days: f64,
    /// Maximum bisection iterations (default 64).
    pub max_iterations: u32,
    /// Bracket width at which bisection stops, in milliseconds (default 1).
    pub resolution_ms: i64,
}

impl SolarTermConfig {
    /// Default search: +-20 day window, millisecond resolution.
    pub fn standard() -> Self {
        Self {
            window_days: 20.0,
            max_iterations: 64,
            resolution_ms: 1,
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.window_days.is_finite() || self.window_days <= 0.0 {
            return Err("window_days must be positive");
        }
        if self.window_days > 90.0 {
            return Err("window_days must not exceed 90");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if self.resolution_ms < 1 {
            return Err("resolution_ms must be at least 1");
        }
        Ok(())
    }
}

impl Default for SolarTermConfig {
    fn default() -> Self {
        Self::standard()
    }
}
