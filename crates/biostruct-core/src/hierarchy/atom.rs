use super::entity::EntityLevel;
use super::ids::ResidueId;
use nalgebra::Point3;
use std::fmt;

/// An atom record within a residue.
///
/// Coordinates and crystallographic metadata are plain public fields; the
/// crate stores them but performs no geometric computation on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// Element symbol, when known (e.g., "C", "N", "FE").
    pub element: Option<String>,
    /// Crystallographic occupancy.
    pub occupancy: f64,
    /// Isotropic B-factor (temperature factor).
    pub b_factor: f64,
    /// Alternate location indicator, when the record carries one.
    pub alt_loc: Option<char>,
}

impl Atom {
    /// Creates a new `Atom` with default values for the optional fields.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            position,
            element: None,
            occupancy: 1.0,
            b_factor: 0.0,
            alt_loc: None,
        }
    }

    pub const fn level(&self) -> EntityLevel {
        EntityLevel::Atom
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Atom {}>", self.name)
    }
}
