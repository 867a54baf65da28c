//! Solar-term search engine.
//!
//! This crate provides:
//! - The 24 solar terms (12 Jie month openers, 12 Qi mid-month terms)
//! - Boundary search: previous/next term, previous/next specific term
//! - Active Jie term and latest Lichun for sexagenary month/year pillars
//! - Range search over all boundaries in an interval

pub mod error;
pub(crate) mod search_util;
pub mod solar_term;
pub mod solar_term_types;

pub use error::SearchError;
pub use solar_term::{
    active_jie_term, next_solar_term, next_specific_term, prev_lichun, prev_solar_term,
    prev_specific_term, search_solar_terms, solar_term_at,
};
pub use solar_term_types::{
    ALL_SOLAR_TERMS, LICHUN_LONGITUDE_DEG, MONTH_SPAN_DEG, SolarTerm, SolarTermConfig,
    SolarTermEvent, SolarTermKind, TERM_SPAN_DEG,
};
