//! `CyclicCoordinate`: one point of the sexagenary cycle Z60 = Z10 x Z12.
//!
//! The index is the only stored state; stem, branch and element are derived.
//! Every arithmetic operation yields a fresh value.

use std::fmt::{Display, Formatter};
use std::ops::{Add, Sub};

use serde::de::Error as DeError;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::relation::{branches_clash, branches_combine};
use crate::stem::Stem;

/// Length of the cycle.
pub const CYCLE_LEN: u8 = 60;

/// Marker for stem/branch pairs of mismatched parity, which never occur.
const NO_COORDINATE: u8 = u8::MAX;

/// Chinese-remainder lookup: `PARTS_TABLE[stem][branch]` is the unique
/// index in [0, 60) congruent to `stem` mod 10 and `branch` mod 12.
const PARTS_TABLE: [[u8; 12]; 10] = build_parts_table();

const fn build_parts_table() -> [[u8; 12]; 10] {
    let mut table = [[NO_COORDINATE; 12]; 10];
    let mut i = 0;
    while i < CYCLE_LEN as usize {
        table[i % 10][i % 12] = i as u8;
        i += 1;
    }
    table
}

/// A position in the 60-element cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CyclicCoordinate {
    index: u8,
}

/// All 60 coordinates in order (0 = Jia-Zi, 59 = Gui-Hai).
pub const ALL_COORDINATES: [CyclicCoordinate; 60] = build_all();

const fn build_all() -> [CyclicCoordinate; 60] {
    let mut all = [CyclicCoordinate { index: 0 }; 60];
    let mut i = 0;
    while i < 60 {
        all[i] = CyclicCoordinate { index: i as u8 };
        i += 1;
    }
    all
}

impl CyclicCoordinate {
    /// Build from any integer by floor modulo 60.
    pub const fn new(n: i64) -> Self {
        Self {
            index: n.rem_euclid(CYCLE_LEN as i64) as u8,
        }
    }

    /// Combine a stem and branch into their coordinate.
    ///
    /// Only same-parity pairs exist in the cycle; mixed parity yields `None`.
    pub const fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        match PARTS_TABLE[stem.index() as usize][branch.index() as usize] {
            NO_COORDINATE => None,
            index => Some(Self { index }),
        }
    }

    /// Canonical index in [0, 59].
    pub const fn index(self) -> u8 {
        self.index
    }

    pub const fn stem_index(self) -> u8 {
        self.index % 10
    }

    pub const fn branch_index(self) -> u8 {
        self.index % 12
    }

    pub const fn stem(self) -> Stem {
        Stem::from_index(self.stem_index())
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.branch_index())
    }

    /// Element of the stem.
    pub const fn element(self) -> Element {
        self.stem().element()
    }

    pub const fn polarity(self) -> Polarity {
        self.stem().polarity()
    }

    /// Two-glyph Chinese label, e.g. `甲子`.
    pub fn glyphs(self) -> String {
        let mut s = String::with_capacity(6);
        s.push(self.stem().glyph());
        s.push(self.branch().glyph());
        s
    }

    /// Romanized label, e.g. `Jia-Zi`.
    pub fn name(self) -> String {
        format!("{}-{}", self.stem().name(), self.branch().name())
    }

    /// Cyclic shift by `offset` (backwards when negative).
    pub const fn shift(self, offset: i64) -> Self {
        Self::new(self.index as i64 + offset.rem_euclid(CYCLE_LEN as i64))
    }

    /// Inverse of [`shift`](Self::shift).
    pub const fn shift_back(self, offset: i64) -> Self {
        Self::new(self.index as i64 - offset.rem_euclid(CYCLE_LEN as i64))
    }

    /// Forward distance from `other` to `self`, in [0, 59].
    ///
    /// `other.shift(self.distance_from(other) as i64) == self` for every pair.
    pub const fn distance_from(self, other: Self) -> u8 {
        (self.index + CYCLE_LEN - other.index) % CYCLE_LEN
    }

    /// Branches are opposed (six apart).
    pub const fn is_clashing(self, other: Self) -> bool {
        branches_clash(self.branch_index(), other.branch_index())
    }

    /// Branches form one of the six harmonies.
    pub const fn is_combining(self, other: Self) -> bool {
        branches_combine(self.branch_index(), other.branch_index())
    }

    /// All 60 coordinates in order.
    pub const fn all() -> &'static [CyclicCoordinate; 60] {
        &ALL_COORDINATES
    }
}

impl Default for CyclicCoordinate {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Display for CyclicCoordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem().name(), self.branch().name())
    }
}

impl Add<i64> for CyclicCoordinate {
    type Output = CyclicCoordinate;

    fn add(self, offset: i64) -> Self::Output {
        self.shift(offset)
    }
}

impl Sub<i64> for CyclicCoordinate {
    type Output = CyclicCoordinate;

    fn sub(self, offset: i64) -> Self::Output {
        self.shift_back(offset)
    }
}

impl Sub for CyclicCoordinate {
    type Output = u8;

    fn sub(self, other: Self) -> u8 {
        self.distance_from(other)
    }
}

impl From<CyclicCoordinate> for u8 {
    fn from(c: CyclicCoordinate) -> u8 {
        c.index
    }
}

impl Serialize for CyclicCoordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rec = serializer.serialize_struct("CyclicCoordinate", 4)?;
        rec.serialize_field("index", &self.index)?;
        rec.serialize_field("stem", self.stem().name())?;
        rec.serialize_field("branch", self.branch().name())?;
        rec.serialize_field("element", self.element().name())?;
        rec.end()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateRepr {
    Index(i64),
    Record {
        index: i64,
        #[serde(default)]
        stem: Option<String>,
        #[serde(default)]
        branch: Option<String>,
    },
}

impl<'de> Deserialize<'de> for CyclicCoordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match CoordinateRepr::deserialize(deserializer)? {
            CoordinateRepr::Index(n) => Ok(Self::new(n)),
            CoordinateRepr::Record {
                index,
                stem,
                branch,
            } => {
                let c = Self::new(index);
                if stem.is_some_and(|s| s != c.stem().name()) {
                    return Err(D::Error::custom(format!("stem does not match index {index}")));
                }
                if branch.is_some_and(|b| b != c.branch().name()) {
                    return Err(D::Error::custom(format!(
                        "branch does not match index {index}"
                    )));
                }
                Ok(c)
            }
        }
    }
}
