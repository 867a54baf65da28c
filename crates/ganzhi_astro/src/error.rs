//! Error types for the astronomical corrector.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from solar-time computations and input normalization.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum AstroError {
    /// A caller-supplied value is outside the documented domain
    /// (unparseable timestamp, day-of-year, longitude).
    InvalidArgument(String),
}

impl Display for AstroError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl Error for AstroError {}
