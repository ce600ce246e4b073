use super::entity::{Children, EntityLevel};
use super::ids::{ModelId, ResidueId};
use std::fmt;

/// Chain id conventionally carried by solvent/water chains.
pub const BLANK_CHAIN_ID: char = ' ';

/// A polymer chain within a model, identified by a one-character id.
///
/// A blank ([`BLANK_CHAIN_ID`]) chain id conventionally holds solvent/water
/// records.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    pub id: char,                                   // Chain identifier (e.g., 'A', 'B')
    pub model_id: ModelId,                          // ID of the parent model
    pub(crate) residues: Children<isize, ResidueId>, // Residues keyed by sequence number
}

impl Chain {
    pub(crate) fn new(id: char, model_id: ModelId) -> Self {
        Self {
            id,
            model_id,
            residues: Children::new(EntityLevel::Residue),
        }
    }

    pub const fn level(&self) -> EntityLevel {
        EntityLevel::Chain
    }

    /// Residues of this chain, keyed by sequence number, in insertion order.
    pub fn residues(&self) -> &Children<isize, ResidueId> {
        &self.residues
    }

    pub fn get_residue_id(&self, seq_number: isize) -> Option<ResidueId> {
        self.residues.get(&seq_number)
    }

    /// Whether this chain carries the blank id used for solvent records.
    pub fn is_blank(&self) -> bool {
        self.id == BLANK_CHAIN_ID
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Chain id={}>", self.id)
    }
}
