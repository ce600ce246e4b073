use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use thiserror::Error;

/// Rank of a node within the structure hierarchy.
///
/// A node's level is fixed by its type at construction and never changes.
/// It is carried in error messages and textual representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLevel {
    Structure,
    Model,
    Chain,
    Residue,
    Atom,
}

#[derive(Debug, Error)]
#[error("Invalid entity level string")]
pub struct ParseEntityLevelError;

impl FromStr for EntityLevel {
    type Err = ParseEntityLevelError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structure" => Ok(EntityLevel::Structure),
            "model" => Ok(EntityLevel::Model),
            "chain" => Ok(EntityLevel::Chain),
            "residue" => Ok(EntityLevel::Residue),
            "atom" => Ok(EntityLevel::Atom),
            _ => Err(ParseEntityLevelError),
        }
    }
}

impl fmt::Display for EntityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EntityLevel::Structure => "Structure",
                EntityLevel::Model => "Model",
                EntityLevel::Chain => "Chain",
                EntityLevel::Residue => "Residue",
                EntityLevel::Atom => "Atom",
            }
        )
    }
}

/// Errors raised by hierarchy mutations and lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("{level} with id '{id}' is already present under this parent")]
    DuplicateChild { level: EntityLevel, id: String },

    #[error("{level} with id '{id}' not found")]
    NotFound { level: EntityLevel, id: String },

    #[error("stale {level} handle")]
    StaleHandle { level: EntityLevel },
}

/// A keyed, insertion-ordered child collection.
///
/// Every parent node in the hierarchy embeds one `Children` per child level,
/// keyed by the child's domain id (model number, chain character, residue
/// sequence number, atom name) and storing the arena handle of the child.
/// Sibling ids are unique; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Children<K: Eq + Hash, H> {
    level: EntityLevel,
    order: Vec<(K, H)>,
    index: HashMap<K, H>,
}

impl<K, H> Children<K, H>
where
    K: Eq + Hash + Clone + fmt::Display,
    H: Copy + PartialEq,
{
    pub(crate) fn new(level: EntityLevel) -> Self {
        Self {
            level,
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Level of the children stored in this collection.
    pub fn level(&self) -> EntityLevel {
        self.level
    }

    /// Registers a child under its id.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::DuplicateChild`] if a sibling with the same
    /// id is already present.
    pub(crate) fn insert(&mut self, key: K, handle: H) -> Result<(), HierarchyError> {
        match self.index.entry(key.clone()) {
            Entry::Occupied(_) => Err(HierarchyError::DuplicateChild {
                level: self.level,
                id: key.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(handle);
                self.order.push((key, handle));
                Ok(())
            }
        }
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<H> {
        let handle = self.index.remove(key)?;
        self.order.retain(|(k, _)| k != key);
        Some(handle)
    }

    pub fn get(&self, key: &K) -> Option<H> {
        self.index.get(key).copied()
    }

    /// Like [`Children::get`], but reports a missing key as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::NotFound`] if no child carries this id.
    pub fn try_get(&self, key: &K) -> Result<H, HierarchyError> {
        self.get(key).ok_or_else(|| HierarchyError::NotFound {
            level: self.level,
            id: key.to_string(),
        })
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterates `(id, handle)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, H)> {
        self.order.iter().map(|(key, handle)| (key, *handle))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter().map(|(key, _)| key)
    }

    pub fn handles(&self) -> impl Iterator<Item = H> {
        self.order.iter().map(|(_, handle)| *handle)
    }
}
