//! Lint for types outside of any package.

use super::super::Lint;
use crate::{NameMapper, NamingError, pipeline::Diagnostic};

/// Lint that errors on type nodes whose namespace cannot be resolved.
pub struct MissingPackageLint;

impl Lint for MissingPackageLint {
    fn name(&self) -> &'static str {
        "missing-package"
    }

    fn description(&self) -> &'static str {
        "Detect types that do not belong to a package"
    }

    fn check(&self, mapper: &NameMapper<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let hierarchy = mapper.hierarchy();
        for (id, node) in hierarchy.iter() {
            if !node.kind().is_type() {
                continue;
            }
            if let Err(NamingError::MissingPackage { path }) = mapper.namespace(id) {
                diagnostics.push(
                    Diagnostic::error(
                        "validate",
                        format!(
                            "{} '{}' is not declared in a header group with a package",
                            node.kind(),
                            node.engine_name()
                        ),
                    )
                    .at(path),
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
    fn test_types_need_a_package() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let header = h.add_child(package, NodeKind::HeaderGroup, "Actor.h");
        h.set_package(header, package);
        let actor = h.add_child(header, NodeKind::Class, "AActor");
        h.add_child(actor, NodeKind::Property, "bHidden");
        h.add_child(package, NodeKind::Struct, "FStray");
        let config = NamingConfig::default();

        let mut diagnostics = Vec::new();
        MissingPackageLint.check(&NameMapper::new(&h, &config), &mut diagnostics);

        assert_eq!(
            diagnostics,
            [Diagnostic::error(
                "validate",
                "struct 'FStray' is not declared in a header group with a package"
            )
            .at("Engine::FStray")]
        );
    }
}
