//! Engine configuration.

use ganzhi_search::SolarTermConfig;

/// Configuration for [`TemporalCoordinateEngine`](crate::TemporalCoordinateEngine).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Derive Day and Hour pillars from apparent solar time (longitude and
    /// equation-of-time corrected). When false, the civil UTC clock is used.
    pub precision_mode: bool,
    /// Solar-term search parameters for Year and Month pillars.
    pub solar_terms: SolarTermConfig,
}

impl EngineConfig {
    /// Apparent solar time with the standard solar-term search.
    pub fn standard() -> Self {
        Self {
            precision_mode: true,
            solar_terms: SolarTermConfig::standard(),
        }
    }

    /// Civil clock for Day and Hour pillars.
    pub fn civil() -> Self {
        Self {
            precision_mode: false,
            ..Self::standard()
        }
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        self.solar_terms.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}
