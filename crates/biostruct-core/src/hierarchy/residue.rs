use super::entity::{Children, EntityLevel};
use super::ids::{AtomId, ChainId};
use phf::{Set, phf_set};
use std::fmt;

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT", "H2O", "DOD", "D2O", "SOL", "TIP3", "TIP4", "SPC",
};

/// Returns whether a residue name denotes a water/solvent record.
pub fn is_water_residue_name(name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(name.trim().to_ascii_uppercase().as_str())
}

/// A residue within a chain, keyed among its siblings by sequence number.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub seq_number: isize,                     // Residue sequence number from the source record
    pub name: String,                          // Residue name (e.g., "ALA", "HOH")
    pub chain_id: ChainId,                     // ID of the parent chain
    pub(crate) atoms: Children<String, AtomId>, // Atoms keyed by atom name
}

impl Residue {
    pub(crate) fn new(seq_number: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            seq_number,
            name: name.to_string(),
            chain_id,
            atoms: Children::new(EntityLevel::Atom),
        }
    }

    pub const fn level(&self) -> EntityLevel {
        EntityLevel::Residue
    }

    /// Atoms of this residue, keyed by name, in insertion order.
    pub fn atoms(&self) -> &Children<String, AtomId> {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atoms.get(&name.to_string())
    }

    /// Whether this residue is a water/solvent record, judged by its name.
    pub fn is_water(&self) -> bool {
        is_water_residue_name(&self.name)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Residue {} seq={}>", self.name, self.seq_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_atom_id(n: u64) -> AtomId {
        AtomId::from(KeyData::from_ffi(n))
    }

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_residue_initializes_fields_correctly() {
        let chain_id = dummy_chain_id(1);
        let residue = Residue::new(10, "GLY", chain_id);
        assert_eq!(residue.seq_number, 10);
        assert_eq!(residue.name, "GLY");
        assert_eq!(residue.chain_id, chain_id);
        assert_eq!(residue.level(), EntityLevel::Residue);
        assert!(residue.atoms().is_empty());
        assert!(residue.get_atom_id_by_name("CA").is_none());
    }

    #[test]
    fn atoms_are_keyed_by_name() {
        let mut residue = Residue::new(5, "ALA", dummy_chain_id(2));
        let ca = dummy_atom_id(42);
        residue.atoms.insert("CA".to_string(), ca).unwrap();
        assert_eq!(residue.get_atom_id_by_name("CA"), Some(ca));
        assert_eq!(residue.atoms().len(), 1);
    }

    #[test]
    fn duplicate_atom_name_is_rejected() {
        let mut residue = Residue::new(5, "ALA", dummy_chain_id(2));
        residue
            .atoms
            .insert("CA".to_string(), dummy_atom_id(1))
            .unwrap();
        assert!(
            residue
                .atoms
                .insert("CA".to_string(), dummy_atom_id(2))
                .is_err()
        );
    }

    #[test]
    fn water_names_are_recognized_case_insensitively() {
        assert!(is_water_residue_name("HOH"));
        assert!(is_water_residue_name("hoh"));
        assert!(is_water_residue_name(" WAT "));
        assert!(is_water_residue_name("TIP3"));
        assert!(!is_water_residue_name("GLY"));
        assert!(!is_water_residue_name(""));
    }

    #[test]
    fn is_water_uses_residue_name() {
        let water = Residue::new(201, "HOH", dummy_chain_id(3));
        let glycine = Residue::new(1, "GLY", dummy_chain_id(3));
        assert!(water.is_water());
        assert!(!glycine.is_water());
    }

    #[test]
    fn residue_display_embeds_name_and_sequence_number() {
        let residue = Residue::new(42, "SER", dummy_chain_id(4));
        assert_eq!(residue.to_string(), "<Residue SER seq=42>");
    }
}
