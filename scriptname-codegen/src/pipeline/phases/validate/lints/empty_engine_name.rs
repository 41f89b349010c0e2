//! Lint for nodes without an engine name.

use super::super::Lint;
use crate::{NameMapper, pipeline::Diagnostic};

/// Lint that errors on nodes whose engine name is empty.
pub struct EmptyEngineNameLint;

impl Lint for EmptyEngineNameLint {
    fn name(&self) -> &'static str {
        "empty-engine-name"
    }

    fn description(&self) -> &'static str {
        "Detect nodes with an empty engine name"
    }

    fn check(&self, mapper: &NameMapper<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let hierarchy = mapper.hierarchy();
        for (id, node) in hierarchy.iter() {
            if node.engine_name().is_empty() {
                diagnostics.push(
                    Diagnostic::error("validate", format!("{} has an empty engine name", node.kind()))
                        .at(hierarchy.path(id)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scriptname_ir::{Hierarchy, NodeKind};
    use scriptname_manifest::NamingConfig;

    use super::*;

    #[test]
    fn test_reports_empty_names() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let actor = h.add_child(package, NodeKind::Class, "AActor");
        h.add_child(actor, NodeKind::Property, "");
        h.add_child(actor, NodeKind::Property, "Health");
        let config = NamingConfig::default();

        let mut diagnostics = Vec::new();
        EmptyEngineNameLint.check(&NameMapper::new(&h, &config), &mut diagnostics);

        assert_eq!(
            diagnostics,
            [Diagnostic::error("validate", "property has an empty engine name")
                .at("Engine::AActor::")]
        );
    }
}
