use super::atom::Atom;
use super::chain::Chain;
use super::entity::{Children, EntityLevel, HierarchyError};
use super::ids::{AtomId, ChainId, ModelId, ResidueId};
use super::model::Model;
use super::residue::Residue;
use slotmap::SlotMap;
use std::fmt;
use tracing::debug;

/// Root of the macromolecular hierarchy and owner of every node in it.
///
/// Nodes of each level live in their own slot-map arena and are addressed by
/// the copyable handles from [`super::ids`]. Parent-to-child membership is a
/// keyed, ordered [`Children`] collection embedded in each parent; child
/// nodes carry the handle of their parent back up the tree. Removing a node
/// releases its whole subtree.
#[derive(Debug, Clone)]
pub struct Structure {
    /// Identifier of the structure (e.g., a PDB entry code).
    id: String,
    models: SlotMap<ModelId, Model>,
    chains: SlotMap<ChainId, Chain>,
    residues: SlotMap<ResidueId, Residue>,
    atoms: SlotMap<AtomId, Atom>,
    /// The structure's own child collection: models keyed by model number.
    model_index: Children<i32, ModelId>,
}

impl Structure {
    /// Creates a new, empty structure with the given identifier.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            models: SlotMap::with_key(),
            chains: SlotMap::with_key(),
            residues: SlotMap::with_key(),
            atoms: SlotMap::with_key(),
            model_index: Children::new(EntityLevel::Model),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub const fn level(&self) -> EntityLevel {
        EntityLevel::Structure
    }

    // --- Models ---

    /// Creates a model with the given number and attaches it to the structure.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::DuplicateChild`] if a model with the same
    /// number is already attached.
    pub fn add_model(&mut self, id: i32) -> Result<ModelId, HierarchyError> {
        let handle = self.models.insert(Model::new(id));
        if let Err(err) = self.model_index.insert(id, handle) {
            self.models.remove(handle);
            return Err(err);
        }
        Ok(handle)
    }

    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id)
    }

    pub fn model_mut(&mut self, id: ModelId) -> Option<&mut Model> {
        self.models.get_mut(id)
    }

    /// Finds a model handle by model number.
    pub fn find_model(&self, id: i32) -> Option<ModelId> {
        self.model_index.get(&id)
    }

    /// Like [`Structure::find_model`], but reports a missing model number
    /// as [`HierarchyError::NotFound`].
    pub fn try_find_model(&self, id: i32) -> Result<ModelId, HierarchyError> {
        self.model_index.try_get(&id)
    }

    /// Iterates models in the order they were attached.
    pub fn models(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.model_index
            .handles()
            .filter_map(|handle| self.models.get(handle).map(|model| (handle, model)))
    }

    /// Detaches a model, releasing all chains, residues, and atoms under it.
    ///
    /// Returns `None` if the handle is stale.
    pub fn remove_model(&mut self, model_id: ModelId) -> Option<Model> {
        let chain_handles: Vec<ChainId> = self.models.get(model_id)?.chains().handles().collect();
        for chain_id in chain_handles {
            self.remove_chain(chain_id);
        }

        let model = self.models.remove(model_id)?;
        self.model_index.remove(&model.id);
        debug!(structure = %self.id, model = model.id, "detached model");
        Some(model)
    }

    // --- Chains ---

    /// Creates a chain under the given model.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::StaleHandle`] if the model handle no longer
    /// resolves, or [`HierarchyError::DuplicateChild`] if the model already
    /// holds a chain with this id.
    pub fn add_chain(&mut self, model_id: ModelId, id: char) -> Result<ChainId, HierarchyError> {
        let model = self
            .models
            .get_mut(model_id)
            .ok_or(HierarchyError::StaleHandle {
                level: EntityLevel::Model,
            })?;

        let handle = self.chains.insert(Chain::new(id, model_id));
        if let Err(err) = model.chains.insert(id, handle) {
            self.chains.remove(handle);
            return Err(err);
        }
        Ok(handle)
    }

    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    pub fn chain_mut(&mut self, id: ChainId) -> Option<&mut Chain> {
        self.chains.get_mut(id)
    }

    /// Finds a chain handle by model handle and chain id.
    pub fn find_chain(&self, model_id: ModelId, id: char) -> Option<ChainId> {
        self.models.get(model_id)?.get_chain_id(id)
    }

    /// Like [`Structure::find_chain`], but reports failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::StaleHandle`] if the model handle no longer
    /// resolves, or [`HierarchyError::NotFound`] if the model holds no chain
    /// with this id.
    pub fn try_find_chain(&self, model_id: ModelId, id: char) -> Result<ChainId, HierarchyError> {
        let model = self.models.get(model_id).ok_or(HierarchyError::StaleHandle {
            level: EntityLevel::Model,
        })?;
        model.chains().try_get(&id)
    }

    /// Iterates the chains of a model in the order they were attached.
    ///
    /// Yields nothing if the model handle is stale.
    pub fn chains_of(&self, model_id: ModelId) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.models
            .get(model_id)
            .into_iter()
            .flat_map(|model| model.chains().handles())
            .filter_map(|handle| self.chains.get(handle).map(|chain| (handle, chain)))
    }

    /// Chains of a model in presentation order: lexicographic by chain id,
    /// blank-id (solvent) chains last.
    pub fn chains_by_display_order(&self, model_id: ModelId) -> Vec<(ChainId, &Chain)> {
        let Some(model) = self.models.get(model_id) else {
            return Vec::new();
        };
        model
            .chains_by_display_order()
            .into_iter()
            .filter_map(|(_, handle)| self.chains.get(handle).map(|chain| (handle, chain)))
            .collect()
    }

    /// Detaches a chain, releasing all residues and atoms under it.
    pub fn remove_chain(&mut self, chain_id: ChainId) -> Option<Chain> {
        let residue_handles: Vec<ResidueId> =
            self.chains.get(chain_id)?.residues().handles().collect();
        for residue_id in residue_handles {
            self.remove_residue(residue_id);
        }

        let chain = self.chains.remove(chain_id)?;
        if let Some(model) = self.models.get_mut(chain.model_id) {
            model.chains.remove(&chain.id);
        }
        debug!(structure = %self.id, chain = %chain.id, "detached chain");
        Some(chain)
    }

    // --- Residues ---

    /// Creates a residue under the given chain.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::StaleHandle`] if the chain handle no longer
    /// resolves, or [`HierarchyError::DuplicateChild`] if the chain already
    /// holds a residue with this sequence number.
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        seq_number: isize,
        name: &str,
    ) -> Result<ResidueId, HierarchyError> {
        let chain = self
            .chains
            .get_mut(chain_id)
            .ok_or(HierarchyError::StaleHandle {
                level: EntityLevel::Chain,
            })?;

        let handle = self.residues.insert(Residue::new(seq_number, name, chain_id));
        if let Err(err) = chain.residues.insert(seq_number, handle) {
            self.residues.remove(handle);
            return Err(err);
        }
        Ok(handle)
    }

    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    pub fn residue_mut(&mut self, id: ResidueId) -> Option<&mut Residue> {
        self.residues.get_mut(id)
    }

    /// Finds a residue handle by chain handle and sequence number.
    pub fn find_residue(&self, chain_id: ChainId, seq_number: isize) -> Option<ResidueId> {
        self.chains.get(chain_id)?.get_residue_id(seq_number)
    }

    /// Like [`Structure::find_residue`], but reports failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::StaleHandle`] if the chain handle no longer
    /// resolves, or [`HierarchyError::NotFound`] if the chain holds no
    /// residue with this sequence number.
    pub fn try_find_residue(
        &self,
        chain_id: ChainId,
        seq_number: isize,
    ) -> Result<ResidueId, HierarchyError> {
        let chain = self.chains.get(chain_id).ok_or(HierarchyError::StaleHandle {
            level: EntityLevel::Chain,
        })?;
        chain.residues().try_get(&seq_number)
    }

    /// Iterates the residues of a chain in the order they were attached.
    pub fn residues_of(&self, chain_id: ChainId) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.chains
            .get(chain_id)
            .into_iter()
            .flat_map(|chain| chain.residues().handles())
            .filter_map(|handle| self.residues.get(handle).map(|residue| (handle, residue)))
    }

    /// Detaches a residue, releasing all atoms under it.
    pub fn remove_residue(&mut self, residue_id: ResidueId) -> Option<Residue> {
        let atom_handles: Vec<AtomId> = self.residues.get(residue_id)?.atoms().handles().collect();
        for atom_id in atom_handles {
            self.remove_atom(atom_id);
        }

        let residue = self.residues.remove(residue_id)?;
        if let Some(chain) = self.chains.get_mut(residue.chain_id) {
            chain.residues.remove(&residue.seq_number);
        }
        debug!(
            structure = %self.id,
            residue = %residue.name,
            seq = residue.seq_number,
            "detached residue"
        );
        Some(residue)
    }

    // --- Atoms ---

    /// Attaches an atom to the given residue, keyed by its name.
    ///
    /// The atom's parent back-reference is overwritten with `residue_id`.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::StaleHandle`] if the residue handle no
    /// longer resolves, or [`HierarchyError::DuplicateChild`] if the residue
    /// already holds an atom with this name.
    pub fn add_atom_to_residue(
        &mut self,
        residue_id: ResidueId,
        mut atom: Atom,
    ) -> Result<AtomId, HierarchyError> {
        let residue = self
            .residues
            .get_mut(residue_id)
            .ok_or(HierarchyError::StaleHandle {
                level: EntityLevel::Residue,
            })?;

        atom.residue_id = residue_id;
        let name = atom.name.clone();
        let handle = self.atoms.insert(atom);
        if let Err(err) = residue.atoms.insert(name, handle) {
            self.atoms.remove(handle);
            return Err(err);
        }
        Ok(handle)
    }

    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Finds an atom handle by residue handle and atom name, reporting
    /// failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::StaleHandle`] if the residue handle no
    /// longer resolves, or [`HierarchyError::NotFound`] if the residue holds
    /// no atom with this name.
    pub fn try_find_atom(&self, residue_id: ResidueId, name: &str) -> Result<AtomId, HierarchyError> {
        let residue = self
            .residues
            .get(residue_id)
            .ok_or(HierarchyError::StaleHandle {
                level: EntityLevel::Residue,
            })?;
        residue.atoms().try_get(&name.to_string())
    }

    pub fn atom_mut(&mut self, id: AtomId) -> Option<&mut Atom> {
        self.atoms.get_mut(id)
    }

    /// Iterates the atoms of a residue in the order they were attached.
    pub fn atoms_of(&self, residue_id: ResidueId) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.residues
            .get(residue_id)
            .into_iter()
            .flat_map(|residue| residue.atoms().handles())
            .filter_map(|handle| self.atoms.get(handle).map(|atom| (handle, atom)))
    }

    /// Detaches an atom from its residue.
    pub fn remove_atom(&mut self, atom_id: AtomId) -> Option<Atom> {
        let atom = self.atoms.remove(atom_id)?;
        if let Some(residue) = self.residues.get_mut(atom.residue_id) {
            residue.atoms.remove(&atom.name);
        }
        Some(atom)
    }

    // --- Whole-tree iteration ---

    /// Returns an iterator over all chains in the structure, in arena order.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Returns an iterator over all residues in the structure, in arena order.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Returns an iterator over all atoms in the structure, in arena order.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Structure id={}>", self.id)
    }
}
