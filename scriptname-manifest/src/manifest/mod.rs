//! Manifest types and parsing for hierarchy.toml files.

mod lower;
mod parse;

pub use parse::parse_manifest;
use scriptname_ir::{DelegateKind, Metadata, NodeKind};
use serde::Deserialize;
use toml::Spanned;

use crate::NamingConfig;

/// Root manifest for hierarchy.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Naming policy configuration
    #[serde(default)]
    pub naming: NamingConfig,

    /// Root nodes (packages)
    #[serde(default)]
    pub nodes: Vec<NodeDecl>,
}

/// A node declaration, nesting its children.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct NodeDecl {
    pub kind: Spanned<NodeKind>,

    /// Engine name
    pub name: Spanned<String>,

    /// Metadata annotations, in declaration order
    #[serde(default)]
    pub metadata: Metadata,

    /// Engine name of the super type (classes, structs, interfaces)
    #[serde(default, rename = "super")]
    pub super_type: Option<Spanned<String>>,

    /// Delegate flavour (functions)
    #[serde(default)]
    pub delegate: Option<Spanned<DelegateKind>>,

    /// Owning package when it differs from the enclosing one (header groups)
    #[serde(default)]
    pub package: Option<Spanned<String>>,

    #[serde(default)]
    pub children: Vec<NodeDecl>,
}

impl Manifest {
    /// Count declared nodes at every depth.
    pub fn node_count(&self) -> usize {
        fn count(decls: &[NodeDecl]) -> usize {
            decls.iter().map(|d| 1 + count(&d.children)).sum()
        }
        count(&self.nodes)
    }
}
