//! Hierarchy manifest parsing and validation.
//!
//! A hierarchy manifest (`hierarchy.toml`) is a textual dump of the engine's
//! reflection data: nested node declarations plus an optional `[naming]`
//! table configuring the naming policies.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod naming;

pub use error::{Error, Result};
pub use manifest::{Manifest, NodeDecl, parse_manifest};
pub use naming::NamingConfig;
use scriptname_ir::Hierarchy;

/// A parsed manifest: its naming configuration and the lowered hierarchy.
#[derive(Debug, Clone, Default)]
pub struct Reflection {
    pub naming: NamingConfig,
    pub hierarchy: Hierarchy,
}
