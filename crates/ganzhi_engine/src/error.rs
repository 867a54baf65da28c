//! Error types for the conversion engine.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ganzhi_astro::AstroError;
use ganzhi_cycle::CycleError;
use ganzhi_search::SearchError;

/// Coarse classification of engine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unparseable timestamp, longitude out of range, bad configuration.
    InvalidArgument,
    /// A dynamically typed operand had the wrong shape.
    TypeMismatch,
    /// A solar-term search failed to bracket its crossing.
    ConvergenceFailure,
}

/// Errors from Four Pillars conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EngineError {
    Astro(AstroError),
    Cycle(CycleError),
    Search(SearchError),
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Astro(_) => ErrorKind::InvalidArgument,
            Self::Cycle(CycleError::TypeMismatch { .. }) => ErrorKind::TypeMismatch,
            Self::Cycle(_) => ErrorKind::InvalidArgument,
            Self::Search(SearchError::ConvergenceFailure(_)) => ErrorKind::ConvergenceFailure,
            Self::Search(_) => ErrorKind::InvalidArgument,
        }
    }
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Astro(e) => write!(f, "{e}"),
            Self::Cycle(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Astro(e) => Some(e),
            Self::Cycle(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<AstroError> for EngineError {
    fn from(e: AstroError) -> Self {
        Self::Astro(e)
    }
}

impl From<CycleError> for EngineError {
    fn from(e: CycleError) -> Self {
        Self::Cycle(e)
    }
}

impl From<SearchError> for EngineError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Astro(inner) => Self::Astro(inner),
            other => Self::Search(other),
        }
    }
}
