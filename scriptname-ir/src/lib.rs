//! Reflected type hierarchy for the scriptname binding name engine.
//!
//! This crate provides the read-only view of the engine's reflection data
//! that every naming policy is computed from.
//!
//! # Architecture
//!
//! ```text
//! hierarchy.toml → scriptname-manifest (parsing) → scriptname-ir (Hierarchy) → naming
//! ```
//!
//! The hierarchy is an arena: nodes own nothing directly, children are kept
//! as ordered [`NodeId`] lists and the enclosing node is referenced by index,
//! so walking up an ownership chain never needs a reference cycle.

mod hierarchy;
mod types;

pub use hierarchy::{Ancestors, Hierarchy, Metadata, Node, NodeId};
pub use types::{DelegateKind, NodeKind};
