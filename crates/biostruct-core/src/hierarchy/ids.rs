use slotmap::new_key_type;

new_key_type! {
    pub struct ModelId;
    pub struct ChainId;
    pub struct ResidueId;
    pub struct AtomId;
}
