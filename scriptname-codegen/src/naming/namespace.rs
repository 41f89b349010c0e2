//! Namespace derivation from the ownership chain.

use scriptname_ir::{Hierarchy, NodeId, NodeKind};

use crate::{NamingError, Result};

/// Find the package short name a node's namespace is rooted at.
///
/// A package names itself. Any other node takes the package of the header
/// groups on its ownership chain; when header groups are nested, the
/// outermost one wins, since a nested header may re-parent its types under a
/// different package than the one it is lexically declared in.
pub fn package_short_name(hierarchy: &Hierarchy, id: NodeId) -> Option<&str> {
    if hierarchy.node(id).kind() == NodeKind::Package {
        return Some(hierarchy.short_name(id)).filter(|name| !name.is_empty());
    }

    hierarchy
        .ancestors(id)
        .filter(|&ancestor| hierarchy.node(ancestor).kind() == NodeKind::HeaderGroup)
        .filter_map(|header| hierarchy.node(header).package())
        .map(|package| hierarchy.short_name(package))
        .last()
        .filter(|name| !name.is_empty())
}

/// Qualified namespace of a node, e.g. `UnrealSharp.Engine`.
///
/// Fails when the node does not belong to any package.
pub fn namespace(hierarchy: &Hierarchy, id: NodeId, prefix: &str) -> Result<String> {
    let short_name =
        package_short_name(hierarchy, id).ok_or_else(|| NamingError::MissingPackage {
            path: hierarchy.path(id),
        })?;
    Ok(format!("{}.{}", prefix, short_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_names_itself() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        assert_eq!(namespace(&h, package, "UnrealSharp").unwrap(), "UnrealSharp.Engine");
    }

    #[test]
    fn test_type_takes_header_package() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let header = h.add_child(package, NodeKind::HeaderGroup, "Actor.h");
        h.set_package(header, package);
        let actor = h.add_child(header, NodeKind::Class, "AActor");
        let property = h.add_child(actor, NodeKind::Property, "bHidden");

        assert_eq!(namespace(&h, actor, "UnrealSharp").unwrap(), "UnrealSharp.Engine");
        assert_eq!(namespace(&h, property, "Bindings").unwrap(), "Bindings.Engine");
    }

    #[test]
    fn test_outermost_header_wins() {
        let mut h = Hierarchy::new();
        let engine = h.add_root(NodeKind::Package, "/Script/Engine");
        let core = h.add_root(NodeKind::Package, "/Script/Core");
        let outer_header = h.add_child(engine, NodeKind::HeaderGroup, "Outer.h");
        h.set_package(outer_header, core);
        let inner_header = h.add_child(outer_header, NodeKind::HeaderGroup, "Inner.h");
        h.set_package(inner_header, engine);
        let ty = h.add_child(inner_header, NodeKind::Struct, "FInner");

        assert_eq!(package_short_name(&h, ty), Some("Core"));
        assert_eq!(namespace(&h, ty, "UnrealSharp").unwrap(), "UnrealSharp.Core");
    }

    #[test]
    fn test_package_ancestor_without_header_fails() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let ty = h.add_child(package, NodeKind::Struct, "FLoose");

        let err = namespace(&h, ty, "UnrealSharp").unwrap_err();
        assert_eq!(
            err,
            NamingError::MissingPackage {
                path: "Engine::FLoose".to_string()
            }
        );
    }

    #[test]
    fn test_orphan_fails() {
        let mut h = Hierarchy::new();
        let ty = h.add_root(NodeKind::Class, "AOrphan");
        assert!(namespace(&h, ty, "UnrealSharp").is_err());
    }

    #[test]
    fn test_empty_short_name_fails() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/");
        assert!(namespace(&h, package, "UnrealSharp").is_err());
    }
}
