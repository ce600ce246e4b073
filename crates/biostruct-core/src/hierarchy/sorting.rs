use super::chain::BLANK_CHAIN_ID;
use std::cmp::Ordering;

/// Presentation order for chain ids within a model.
///
/// Chains order lexicographically by id, except that a blank id
/// ([`BLANK_CHAIN_ID`]) always orders after any non-blank id: blank chains
/// conventionally hold solvent/water records and are deprioritized in
/// display. Two blank ids compare equal, so a stable sort preserves their
/// relative order.
///
/// This is a strict weak ordering and is meant to be applied through
/// standard sort facilities (`sort_by`, `sort_unstable_by`).
pub fn chain_id_order(a: char, b: char) -> Ordering {
    match (a == BLANK_CHAIN_ID, b == BLANK_CHAIN_ID) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(&b),
    }
}
