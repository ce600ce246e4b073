//! # Hierarchy Module
//!
//! Data structures for the macromolecular hierarchy and the operations that
//! keep it consistent.
//!
//! ## Key Components
//!
//! - [`ids`] - Stable handle types for every level of the hierarchy
//! - [`entity`] - The shared node capability: level tags, keyed child
//!   collections, and the hierarchy error type
//! - [`atom`] - Individual atom representation with coordinates and
//!   crystallographic metadata
//! - [`residue`] - Residue nodes and water/solvent classification
//! - [`chain`] - Polymer chain nodes identified by a one-character id
//! - [`model`] - One structural snapshot (e.g., an NMR conformer) owning a
//!   set of chains
//! - [`structure`] - The root node and arena owning the whole tree
//! - [`sorting`] - Presentation-order comparators
//!
//! ## Usage
//!
//! Most operations start from a [`structure::Structure`], which creates and
//! owns all other nodes:
//!
//! ```
//! use biostruct::hierarchy::structure::Structure;
//!
//! let mut structure = Structure::new("1abc");
//! let model_id = structure.add_model(0)?;
//! let chain_id = structure.add_chain(model_id, 'A')?;
//! structure.add_residue(chain_id, 1, "GLY")?;
//! # Ok::<(), biostruct::hierarchy::entity::HierarchyError>(())
//! ```

pub mod atom;
pub mod chain;
pub mod entity;
pub mod ids;
pub mod model;
pub mod residue;
pub mod sorting;
pub mod structure;
