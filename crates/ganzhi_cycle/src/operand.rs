//! Arithmetic on operands arriving from dynamically typed input.
//!
//! Rust callers use [`CyclicCoordinate::shift`] and
//! [`CyclicCoordinate::distance_from`] directly. Values decoded from JSON
//! (a request body, a CLI argument) are first classified here; anything that
//! is neither an integer offset nor a coordinate record is a
//! [`CycleError::TypeMismatch`].

use serde::Deserialize;
use serde_json::Value;

use crate::coordinate::CyclicCoordinate;
use crate::error::CycleError;

/// One of the two operand shapes cyclic arithmetic accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Integer shift.
    Offset(i64),
    /// Another coordinate (for distances).
    Coordinate(CyclicCoordinate),
}

/// Result of subtracting a dynamic operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difference {
    /// Coordinate minus offset.
    Coordinate(CyclicCoordinate),
    /// Coordinate minus coordinate: forward distance in [0, 59].
    Distance(u8),
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Operand {
    /// Classify a JSON value. `operation` names the caller for error reports.
    pub fn from_value(value: &Value, operation: &'static str) -> Result<Self, CycleError> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Operand::Offset(i))
                } else if let Some(u) = n.as_u64() {
                    // Beyond i64: only the residue mod 60 matters.
                    Ok(Operand::Offset((u % 60) as i64))
                } else {
                    Err(CycleError::TypeMismatch {
                        operation,
                        found: value_kind(value),
                    })
                }
            }
            Value::Object(_) => CyclicCoordinate::deserialize(value)
                .map(Operand::Coordinate)
                .map_err(|e| CycleError::InvalidRecord(e.to_string())),
            other => Err(CycleError::TypeMismatch {
                operation,
                found: value_kind(other),
            }),
        }
    }
}

impl CyclicCoordinate {
    /// Shift by a dynamic operand; only integer offsets are accepted.
    pub fn try_add(self, operand: &Value) -> Result<CyclicCoordinate, CycleError> {
        match Operand::from_value(operand, "add")? {
            Operand::Offset(n) => Ok(self.shift(n)),
            Operand::Coordinate(_) => Err(CycleError::TypeMismatch {
                operation: "add",
                found: "coordinate",
            }),
        }
    }

    /// Subtract a dynamic operand: an offset shifts back, a coordinate
    /// yields the forward distance.
    pub fn try_subtract(self, operand: &Value) -> Result<Difference, CycleError> {
        Ok(match Operand::from_value(operand, "subtract")? {
            Operand::Offset(n) => Difference::Coordinate(self.shift_back(n)),
            Operand::Coordinate(other) => Difference::Distance(self.distance_from(other)),
        })
    }
}
