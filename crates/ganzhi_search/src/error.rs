//! Error types for solar-term search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_astro::AstroError;

/// Errors from solar-term boundary search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Search configuration is invalid.
    InvalidConfig(&'static str),
    /// The search window did not bracket a longitude crossing.
    ConvergenceFailure(&'static str),
    /// Error from the astronomical layer (input out of range).
    Astro(AstroError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::ConvergenceFailure(msg) => write!(f, "no convergence: {msg}"),
            Self::Astro(e) => write!(f, "astronomy error: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<AstroError> for SearchError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}
