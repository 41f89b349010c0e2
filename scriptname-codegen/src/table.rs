//! Whole-hierarchy name resolution.
//!
//! A [`NameTable`] is the resolved view of every node in a hierarchy, in
//! depth-first declaration order.
//!
//! # Example
//!
//! ```ignore
//! let mapper = NameMapper::new(&reflection.hierarchy, &reflection.naming);
//! let table = NameTable::build(&mapper)?;
//! println!("{}", table);
//! ```

use std::fmt;

use scriptname_ir::{NodeId, NodeKind};
use serde::Serialize;

use crate::{NameMapper, Result};

/// The resolved names of one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameRow {
    /// Node path, e.g. `Engine::Actor.h::AActor`.
    pub path: String,
    pub kind: NodeKind,
    pub engine_name: String,
    /// Generated identifier.
    pub name: String,
    /// Namespace, for type nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Namespace-qualified name, for type nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Resolved names for every node of a hierarchy.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct NameTable {
    rows: Vec<NameRow>,
}

impl NameTable {
    /// Resolve every node. Any fatal naming error aborts the whole build.
    pub fn build(mapper: &NameMapper<'_>) -> Result<Self> {
        let hierarchy = mapper.hierarchy();
        let rows = hierarchy
            .walk()
            .into_iter()
            .map(|id| Self::row(mapper, id))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(rows = rows.len(), "resolved name table");
        Ok(Self { rows })
    }

    fn row(mapper: &NameMapper<'_>, id: NodeId) -> Result<NameRow> {
        let hierarchy = mapper.hierarchy();
        let node = hierarchy.node(id);
        let (namespace, full_name) = if node.kind().is_type() {
            (Some(mapper.namespace(id)?), Some(mapper.full_name(id)?))
        } else {
            (None, None)
        };
        Ok(NameRow {
            path: hierarchy.path(id),
            kind: node.kind(),
            engine_name: node.engine_name().to_string(),
            name: mapper.name(id)?,
            namespace,
            full_name,
        })
    }

    pub fn rows(&self) -> &[NameRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only rows of the given kind.
    pub fn filter_kind(self, kind: NodeKind) -> Self {
        Self {
            rows: self.rows.into_iter().filter(|row| row.kind == kind).collect(),
        }
    }

    /// Find the row for a node path.
    pub fn find(&self, path: &str) -> Option<&NameRow> {
        self.rows.iter().find(|row| row.path == path)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render as aligned text columns.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

const HEADERS: [&str; 4] = ["KIND", "PATH", "NAME", "FULL NAME"];

impl fmt::Display for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[&str; 4]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.kind.as_str(),
                    row.path.as_str(),
                    row.name.as_str(),
                    row.full_name.as_deref().unwrap_or("-"),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(str::len);
        for line in &cells {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        for line in std::iter::once(&HEADERS).chain(&cells) {
            let last = line.len() - 1;
            for (i, cell) in line.iter().enumerate() {
                if i == last {
                    writeln!(f, "{}", cell)?;
                } else {
                    write!(f, "{:<width$}  ", cell, width = widths[i])?;
                }
            }
        }
        Ok(())
    }
}
