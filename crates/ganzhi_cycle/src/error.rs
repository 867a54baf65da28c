//! Error types for cyclic-coordinate operations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from cyclic arithmetic on dynamically typed operands.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CycleError {
    /// An operand of the wrong shape reached an arithmetic operation.
    TypeMismatch {
        /// The operation that rejected the operand (`"add"`, `"subtract"`).
        operation: &'static str,
        /// Shape of the rejected operand.
        found: &'static str,
    },
    /// A serialized coordinate record is malformed or self-inconsistent.
    InvalidRecord(String),
}

impl Display for CycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { operation, found } => {
                write!(f, "type mismatch: cannot {operation} operand of type {found}")
            }
            Self::InvalidRecord(msg) => write!(f, "invalid coordinate record: {msg}"),
        }
    }
}

impl Error for CycleError {}
