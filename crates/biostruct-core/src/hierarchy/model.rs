use super::entity::{Children, EntityLevel};
use super::ids::ChainId;
use super::sorting::chain_id_order;
use std::fmt;

/// One structural snapshot within a structure.
///
/// A structure derived from X-ray crystallography usually holds a single
/// model; NMR structures normally contain many conformers, one model each.
/// Models are keyed among their siblings by an integer id.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub id: i32,                                // Model number, unique within the structure
    pub(crate) chains: Children<char, ChainId>, // Chains keyed by their one-character id
}

impl Model {
    pub(crate) fn new(id: i32) -> Self {
        Self {
            id,
            chains: Children::new(EntityLevel::Chain),
        }
    }

    pub const fn level(&self) -> EntityLevel {
        EntityLevel::Model
    }

    /// Chains of this model, keyed by chain id, in insertion order.
    pub fn chains(&self) -> &Children<char, ChainId> {
        &self.chains
    }

    pub fn get_chain_id(&self, id: char) -> Option<ChainId> {
        self.chains.get(&id)
    }

    /// Chains in presentation order: lexicographic by id, blank-id chains
    /// (solvent) last. Insertion order breaks ties among blank ids.
    pub fn chains_by_display_order(&self) -> Vec<(char, ChainId)> {
        let mut ordered: Vec<(char, ChainId)> =
            self.chains.iter().map(|(&id, handle)| (id, handle)).collect();
        ordered.sort_by(|a, b| chain_id_order(a.0, b.0));
        ordered
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Model id={}>", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::KeyData;

    fn dummy_chain_id(n: u64) -> ChainId {
        ChainId::from(KeyData::from_ffi(n))
    }

    #[test]
    fn new_model_is_empty_and_keeps_its_id() {
        let model = Model::new(7);
        assert_eq!(model.id, 7);
        assert_eq!(model.level(), EntityLevel::Model);
        assert!(model.chains().is_empty());
    }

    #[test]
    fn chains_are_keyed_by_character_id() {
        let mut model = Model::new(0);
        let a = dummy_chain_id(1);
        model.chains.insert('A', a).unwrap();
        assert_eq!(model.get_chain_id('A'), Some(a));
        assert_eq!(model.get_chain_id('B'), None);
    }

    #[test]
    fn display_order_puts_blank_chain_last() {
        let mut model = Model::new(0);
        model.chains.insert('B', dummy_chain_id(1)).unwrap();
        model.chains.insert(' ', dummy_chain_id(2)).unwrap();
        model.chains.insert('A', dummy_chain_id(3)).unwrap();

        let ordered: Vec<char> = model
            .chains_by_display_order()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(ordered, vec!['A', 'B', ' ']);
    }

    #[test]
    fn display_order_preserves_insertion_order_among_blank_chains() {
        // Sibling uniqueness forbids two blank ids under one model, but the
        // comparator itself must still treat them as equal for stability.
        let mut ids = vec![(' ', dummy_chain_id(9)), ('A', dummy_chain_id(1))];
        ids.sort_by(|a, b| super::chain_id_order(a.0, b.0));
        assert_eq!(ids[0].0, 'A');
        assert_eq!(ids[1].1, dummy_chain_id(9));
    }

    #[test]
    fn model_display_embeds_id_and_level_marker() {
        let model = Model::new(0);
        let repr = model.to_string();
        assert_eq!(repr, "<Model id=0>");
        assert!(repr.contains("0"));
        assert!(repr.contains("Model"));
    }
}
