//! Cyclic arithmetic on operands decoded from text or JSON.
//!
//! Operands are classified by [`ganzhi_cycle::Operand`]; shape errors
//! surface as [`ErrorKind::TypeMismatch`](crate::ErrorKind::TypeMismatch).

use ganzhi_cycle::{CyclicCoordinate, Difference};
use serde_json::Value;

use crate::error::EngineError;

/// Read an operand from text. Anything that is not valid JSON is kept as
/// a JSON string, so it reaches the shape check instead of a parse error.
pub fn parse_operand(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned()))
}

/// `base + operand`; only integer offsets are accepted.
pub fn add_operand(
    base: CyclicCoordinate,
    operand: &Value,
) -> Result<CyclicCoordinate, EngineError> {
    Ok(base.try_add(operand)?)
}

/// `base - operand`: an integer shifts back, a coordinate gives the distance.
pub fn subtract_operand(
    base: CyclicCoordinate,
    operand: &Value,
) -> Result<Difference, EngineError> {
    Ok(base.try_subtract(operand)?)
}
