//! Lattice geometry and symmetry identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Six lattice parameters: lengths a, b, c (Å) then angles α, β, γ (°).
///
/// The array length is part of the type, so a cell with a missing or extra
/// parameter cannot be constructed or deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitCell([f64; 6]);

impl UnitCell {
    pub const LEN: usize = 6;

    pub fn new(parameters: [f64; 6]) -> Self {
        Self(parameters)
    }

    /// Build a cell from a slice, returning `None` unless it holds exactly six values.
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        <[f64; 6]>::try_from(values).ok().map(Self)
    }

    pub fn parameters(&self) -> &[f64; 6] {
        &self.0
    }
}

impl From<[f64; 6]> for UnitCell {
    fn from(parameters: [f64; 6]) -> Self {
        Self(parameters)
    }
}

/// Formats as six space-separated values with three decimals, the form
/// XSCALE expects after `UNIT_CELL_CONSTANTS=`.
impl fmt::Display for UnitCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value:.3}")?;
        }
        Ok(())
    }
}

/// Space-group number. Opaque here: only equality and frequency matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SpaceGroup(u32);

impl SpaceGroup {
    /// Returns `None` for zero; space-group numbers start at 1.
    pub fn new(number: u32) -> Option<Self> {
        (number > 0).then_some(Self(number))
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SpaceGroup {
    type Error = String;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| "space group number must be positive".to_string())
    }
}

impl From<SpaceGroup> for u32 {
    fn from(group: SpaceGroup) -> Self {
        group.0
    }
}

impl fmt::Display for SpaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
