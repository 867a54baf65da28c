//! Four Pillars (sexagenary year, month, day, hour) conversion engine.
//!
//! A civil timestamp and observer longitude are converted to four
//! [`CyclicCoordinate`]s:
//! - Day and Hour from the local clock (apparent solar time in precision
//!   mode, the civil UTC clock otherwise)
//! - Year and Month from solar-term boundaries of the civil instant
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let t = Utc.with_ymd_and_hms(2024, 2, 10, 12, 0, 0).unwrap();
//! let set = ganzhi_engine::get_coordinates(&t, 0.0, false).unwrap();
//! assert_eq!(set.year.name(), "Jia-Chen");
//! assert_eq!(set.month.name(), "Bing-Yin");
//! ```

pub mod arithmetic;
pub mod config;
pub mod engine;
pub mod error;
pub mod pillars;
pub mod types;

pub use arithmetic::{add_operand, parse_operand, subtract_operand};
pub use config::EngineConfig;
pub use engine::{TemporalCoordinateEngine, get_coordinates, get_coordinates_str};
pub use error::{EngineError, ErrorKind};
pub use ganzhi_cycle::{CyclicCoordinate, Difference};
pub use ganzhi_search::{SolarTerm, SolarTermConfig};
pub use pillars::{
    DAY_EPOCH_INDEX, day_pillar, five_rats_hour_stem, five_tigers_month_stem, hour_bracket,
    hour_pillar, month_pillar, year_pillar,
};
pub use types::{Metadata, SolarTermInfo, TemporalCoordinateSet};
