//! Lint for sibling members that resolve to the same identifier.

use indexmap::IndexMap;
use scriptname_ir::{NodeId, NodeKind};

use super::super::Lint;
use crate::{NameMapper, pipeline::Diagnostic};

/// Lint that warns when two members of the same owner resolve to the same
/// identifier.
///
/// Properties and functions can collide after conflict fallback, which
/// replaces a colliding candidate with the engine name without checking it
/// again. Parameters can collide when two of them revert to the same engine
/// name.
pub struct DuplicateMemberNameLint;

fn is_member(kind: NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Property | NodeKind::Function | NodeKind::Parameter
    )
}

impl Lint for DuplicateMemberNameLint {
    fn name(&self) -> &'static str {
        "duplicate-member-name"
    }

    fn description(&self) -> &'static str {
        "Detect sibling properties, functions or parameters resolving to the same name"
    }

    fn check(&self, mapper: &NameMapper<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let hierarchy = mapper.hierarchy();
        for (owner, node) in hierarchy.iter() {
            let mut by_name: IndexMap<String, Vec<NodeId>> = IndexMap::new();
            for &child in node.children() {
                if !is_member(hierarchy.node(child).kind()) {
                    continue;
                }
                // Unresolvable members are reported by the other lints.
                if let Ok(name) = mapper.name(child) {
                    by_name.entry(name).or_default().push(child);
                }
            }

            for (name, members) in by_name.iter().filter(|(_, members)| members.len() > 1) {
                let engine_names: Vec<&str> = members
                    .iter()
                    .map(|&member| hierarchy.node(member).engine_name())
                    .collect();
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "members {} all resolve to '{}'",
                            quoted(&engine_names),
                            name
                        ),
                    )
                    .at(hierarchy.path(owner)),
                );
            }
        }
    }
}

fn quoted(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| format!("'{}'", name))
        .collect::<Vec<_>>()
        .join(", ")
}
