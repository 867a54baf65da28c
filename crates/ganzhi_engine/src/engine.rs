//! Civil timestamp to Four Pillars conversion.

use chrono::{Datelike, Timelike};
use ganzhi_astro::{UtcInstant, parse_timestamp, true_solar_time, validate_longitude};
use ganzhi_search::{SearchError, active_jie_term, prev_lichun};
use log::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::pillars::{day_pillar, hour_pillar, month_pillar, year_pillar};
use crate::types::{Metadata, TemporalCoordinateSet};

/// Stateless converter holding only its configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalCoordinateEngine {
    config: EngineConfig,
}

impl TemporalCoordinateEngine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config
            .validate()
            .map_err(|msg| EngineError::Search(SearchError::InvalidConfig(msg)))?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Four Pillars of `timestamp` for an observer at `longitude` (degrees,
    /// east positive). Naive timestamps are read as UTC.
    pub fn get_coordinates<T: UtcInstant + ?Sized>(
        &self,
        timestamp: &T,
        longitude: f64,
    ) -> Result<TemporalCoordinateSet, EngineError> {
        let longitude = validate_longitude(longitude)?;
        let civil_utc = timestamp.utc_instant();
        let precision_mode = self.config.precision_mode;

        let solar_time = if precision_mode {
            true_solar_time(&civil_utc, longitude)?
        } else {
            civil_utc.naive_utc()
        };
        let day = day_pillar(solar_time.date());
        let hour = hour_pillar(day, solar_time.hour());

        // Solar longitude is absolute, so term boundaries use the civil instant.
        let terms = &self.config.solar_terms;
        let lichun = prev_lichun(&civil_utc, terms)?;
        let year = year_pillar(lichun.instant.year());
        let jie = active_jie_term(&civil_utc, terms)?;
        let month = month_pillar(year, jie.term);

        debug!(
            "{civil_utc} lon={longitude} -> {year} {month} {day} {hour} (solar {solar_time})"
        );
        Ok(TemporalCoordinateSet {
            metadata: Metadata {
                civil_utc,
                solar_time,
                longitude,
                precision_mode,
                solar_term: jie.into(),
            },
            year,
            month,
            day,
            hour,
        })
    }

    /// As [`get_coordinates`](Self::get_coordinates), parsing `timestamp` first.
    pub fn get_coordinates_str(
        &self,
        timestamp: &str,
        longitude: f64,
    ) -> Result<TemporalCoordinateSet, EngineError> {
        let instant = parse_timestamp(timestamp)?;
        self.get_coordinates(&instant, longitude)
    }
}

/// Four Pillars with the standard search configuration.
pub fn get_coordinates<T: UtcInstant + ?Sized>(
    timestamp: &T,
    longitude: f64,
    precision_mode: bool,
) -> Result<TemporalCoordinateSet, EngineError> {
    engine_for(precision_mode).get_coordinates(timestamp, longitude)
}

/// Four Pillars of a textual timestamp (RFC 3339, naive ISO-8601 or a bare date).
pub fn get_coordinates_str(
    timestamp: &str,
    longitude: f64,
    precision_mode: bool,
) -> Result<TemporalCoordinateSet, EngineError> {
    engine_for(precision_mode).get_coordinates_str(timestamp, longitude)
}

fn engine_for(precision_mode: bool) -> TemporalCoordinateEngine {
    TemporalCoordinateEngine {
        config: EngineConfig {
            precision_mode,
            ..EngineConfig::standard()
        },
    }
}
