//! Conversion result types.

use chrono::{DateTime, NaiveDateTime, Utc};
use ganzhi_cycle::CyclicCoordinate;
use ganzhi_search::{SolarTerm, SolarTermEvent};
use serde::Serialize;

/// The Jie term governing the month pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermInfo {
    /// 0-based term index (Lichun=0).
    pub index: u8,
    pub name: &'static str,
    pub glyphs: &'static str,
    /// Boundary instant at which the term began.
    pub started_at: DateTime<Utc>,
}

impl SolarTermInfo {
    pub fn term(&self) -> SolarTerm {
        SolarTerm::from_index(self.index)
    }
}

impl From<SolarTermEvent> for SolarTermInfo {
    fn from(ev: SolarTermEvent) -> Self {
        Self {
            index: ev.term.index(),
            name: ev.term.name(),
            glyphs: ev.term.glyphs(),
            started_at: ev.instant,
        }
    }
}

/// Inputs and intermediate values of one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metadata {
    /// Input instant normalized to UTC.
    pub civil_utc: DateTime<Utc>,
    /// Clock reading the Day and Hour pillars were taken from: apparent
    /// solar time in precision mode, the civil UTC clock otherwise.
    pub solar_time: NaiveDateTime,
    /// Observer longitude in degrees, east positive.
    pub longitude: f64,
    pub precision_mode: bool,
    pub solar_term: SolarTermInfo,
}

/// Four Pillars of one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemporalCoordinateSet {
    pub metadata: Metadata,
    pub year: CyclicCoordinate,
    pub month: CyclicCoordinate,
    pub day: CyclicCoordinate,
    pub hour: CyclicCoordinate,
}

#[derive(Serialize)]
struct Coordinates {
    year: CyclicCoordinate,
    month: CyclicCoordinate,
    day: CyclicCoordinate,
    hour: CyclicCoordinate,
}

#[derive(Serialize)]
struct Record<'a> {
    metadata: &'a Metadata,
    coordinates: Coordinates,
}

impl TemporalCoordinateSet {
    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [CyclicCoordinate; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// Pretty-printed JSON record.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for TemporalCoordinateSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Record {
            metadata: &self.metadata,
            coordinates: Coordinates {
                year: self.year,
                month: self.month,
                day: self.day,
                hour: self.hour,
            },
        }
        .serialize(serializer)
    }
}
