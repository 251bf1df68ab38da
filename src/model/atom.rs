//! Named atom with a Cartesian position.
//!
//! Atoms are created by the PDB reader (or the backbone helpers) and only read by the
//! assignment pipeline, which needs nothing beyond the atom label and its coordinates.

use super::types::Point;
use smol_str::SmolStr;
use std::fmt;

/// Labeled atom positioned in ångström space.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom name as it appears in the structure file (e.g., `CA`, `O`, `H`).
    pub name: SmolStr,
    /// Cartesian coordinates measured in ångströms.
    pub pos: Point,
}

impl Atom {
    /// Creates a new atom from a name and position.
    ///
    /// # Arguments
    ///
    /// * `name` - Atom label such as `"N"` or `"OXT"`.
    /// * `pos` - `Point` describing the Cartesian coordinates in ångströms.
    pub fn new(name: &str, pos: Point) -> Self {
        Self {
            name: SmolStr::new(name),
            pos,
        }
    }

    /// Computes the Euclidean distance to another atom in ångströms.
    pub fn distance(&self, other: &Atom) -> f64 {
        nalgebra::distance(&self.pos, &other.pos)
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atom {{ name: \"{}\", pos: [{:.3}, {:.3}, {:.3}] }}",
            self.name, self.pos.x, self.pos.y, self.pos.z
        )
    }
}
