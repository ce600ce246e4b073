//! # biostruct Core Library
//!
//! A hierarchical, in-memory data model for macromolecular structures,
//! following the classical Structure → Model → Chain → Residue → Atom
//! decomposition used by crystallographic and NMR structure records.
//!
//! ## Architectural Philosophy
//!
//! The crate deliberately separates *identity* from *ownership*:
//!
//! - **Ownership** is centralized. A [`hierarchy::structure::Structure`]
//!   owns every node of the tree in per-level arenas and hands out small,
//!   copyable handles ([`hierarchy::ids`]) instead of references. Removing
//!   a node releases its whole subtree.
//!
//! - **Identity** is local. Every node carries the domain identifier it is
//!   known by among its siblings (an integer model number, a one-character
//!   chain id, a residue sequence number, an atom name), and every parent
//!   keeps its children in a keyed, insertion-ordered collection
//!   ([`hierarchy::entity::Children`]) that enforces sibling uniqueness.
//!
//! Presentation order is not storage order: chains of a model are listed
//! with blank-id chains (conventionally solvent) last, via the comparator in
//! [`hierarchy::sorting`].
//!
//! Parsing of structure files, geometry, and serialization are out of scope;
//! this crate is the foundation those layers build on.

pub mod hierarchy;
