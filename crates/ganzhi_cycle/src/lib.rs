//! Sexagenary cycle arithmetic.
//!
//! This crate provides:
//! - The 10 Heavenly Stems, 12 Earthly Branches and 5 elements
//! - `CyclicCoordinate`, an immutable point of Z60 = Z10 x Z12
//! - Clash and Liu He (six harmonies) branch relations
//! - A checked arithmetic path for dynamically typed (JSON) operands
//!
//! All tables are `const`/`static` data; nothing here allocates shared state.

pub mod branch;
pub mod coordinate;
pub mod element;
pub mod error;
pub mod operand;
pub mod relation;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use coordinate::{ALL_COORDINATES, CYCLE_LEN, CyclicCoordinate};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::CycleError;
pub use operand::{Difference, Operand};
pub use relation::{LIU_HE_PAIRS, branches_clash, branches_combine};
pub use stem::{ALL_STEMS, Stem};
