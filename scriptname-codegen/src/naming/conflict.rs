//! Sibling collision detection.

use scriptname_ir::{Hierarchy, NodeId, NodeKind};
use tracing::debug;

use super::{NameKind, script_name, scriptify};
use crate::{NamingError, Result};

/// Pre-conflict candidate of a sibling, for the kinds that take part in
/// conflict checks.
///
/// Uses the plain scriptify pipeline rather than the sibling's final name, so
/// checking one member never recurses into resolving another.
fn sibling_candidate(hierarchy: &Hierarchy, sibling: NodeId) -> Result<Option<String>> {
    let node = hierarchy.node(sibling);
    let kind = match node.kind() {
        NodeKind::Property => NameKind::Property,
        NodeKind::Function => NameKind::Function,
        _ => return Ok(None),
    };
    scriptify(&script_name(node), kind)
        .map(Some)
        .map_err(|_| NamingError::EmptyEngineName {
            path: hierarchy.path(sibling),
        })
}

/// Find the first property or function sibling whose candidate equals `candidate`.
pub fn find_conflict(hierarchy: &Hierarchy, id: NodeId, candidate: &str) -> Result<Option<NodeId>> {
    for sibling in hierarchy.siblings(id) {
        if sibling_candidate(hierarchy, sibling)?.as_deref() == Some(candidate) {
            return Ok(Some(sibling));
        }
    }
    Ok(None)
}

/// Result of checking a candidate against its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictOutcome {
    /// No sibling collides; the candidate stands.
    Kept(String),
    /// `sibling` collides; the node falls back to its engine name.
    Fallback { name: String, sibling: NodeId },
}

impl ConflictOutcome {
    /// The name the node ends up with.
    pub fn into_name(self) -> String {
        match self {
            ConflictOutcome::Kept(name) | ConflictOutcome::Fallback { name, .. } => name,
        }
    }
}

/// Check `candidate` against the node's siblings.
pub fn check_conflict(
    hierarchy: &Hierarchy,
    id: NodeId,
    candidate: String,
) -> Result<ConflictOutcome> {
    let Some(sibling) = find_conflict(hierarchy, id, &candidate)? else {
        return Ok(ConflictOutcome::Kept(candidate));
    };

    let engine_name = hierarchy.node(id).engine_name();
    debug!(
        node = %hierarchy.path(id),
        sibling = %hierarchy.path(sibling),
        candidate = %candidate,
        fallback = engine_name,
        "name conflict, falling back to engine name"
    );
    Ok(ConflictOutcome::Fallback {
        name: engine_name.to_string(),
        sibling,
    })
}

/// Keep `candidate` unless a sibling collides with it, in which case fall
/// back to the node's engine name.
///
/// The fallback is not re-checked against the siblings.
pub fn resolve_conflict(hierarchy: &Hierarchy, id: NodeId, candidate: String) -> Result<String> {
    check_conflict(hierarchy, id, candidate).map(ConflictOutcome::into_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with_members(members: &[(NodeKind, &str)]) -> (Hierarchy, Vec<NodeId>) {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let class = h.add_child(package, NodeKind::Class, "AActor");
        let ids = members
            .iter()
            .map(|(kind, name)| h.add_child(class, *kind, *name))
            .collect();
        (h, ids)
    }

    #[test]
    fn test_no_conflict_keeps_candidate() {
        let (h, ids) = class_with_members(&[
            (NodeKind::Property, "bHidden"),
            (NodeKind::Function, "GetOwner"),
        ]);
        assert_eq!(resolve_conflict(&h, ids[0], "Hidden".into()).unwrap(), "Hidden");
    }

    #[test]
    fn test_property_collides_with_function() {
        let (h, ids) = class_with_members(&[
            (NodeKind::Property, "Owner"),
            (NodeKind::Function, "Owner"),
        ]);
        assert_eq!(find_conflict(&h, ids[0], "Owner").unwrap(), Some(ids[1]));
        assert_eq!(resolve_conflict(&h, ids[0], "Owner".into()).unwrap(), "Owner");
    }

    #[test]
    fn test_collision_falls_back_to_engine_name() {
        let (mut h, ids) = class_with_members(&[
            (NodeKind::Property, "bValue"),
            (NodeKind::Property, "Value_1"),
        ]);
        h.set_metadata(ids[1], "ScriptName", "Value");

        assert_eq!(resolve_conflict(&h, ids[0], "Value".into()).unwrap(), "bValue");
        assert_eq!(resolve_conflict(&h, ids[1], "Value".into()).unwrap(), "Value_1");
    }

    #[test]
    fn test_sibling_property_compared_after_prefix_strip() {
        let (h, ids) = class_with_members(&[
            (NodeKind::Function, "Hidden"),
            (NodeKind::Property, "bHidden"),
        ]);
        assert_eq!(resolve_conflict(&h, ids[0], "Hidden".into()).unwrap(), "Hidden");
        assert_eq!(find_conflict(&h, ids[0], "Hidden").unwrap(), Some(ids[1]));
    }

    #[test]
    fn test_check_conflict_reports_sibling() {
        let (h, ids) = class_with_members(&[
            (NodeKind::Property, "bActive"),
            (NodeKind::Function, "Active"),
        ]);
        assert_eq!(
            check_conflict(&h, ids[0], "Active".into()).unwrap(),
            ConflictOutcome::Fallback {
                name: "bActive".into(),
                sibling: ids[1],
            }
        );
    }

    #[test]
    fn test_other_kinds_do_not_participate() {
        let (h, ids) = class_with_members(&[
            (NodeKind::Property, "Target"),
            (NodeKind::Parameter, "Target"),
            (NodeKind::Struct, "Target"),
        ]);
        assert_eq!(find_conflict(&h, ids[0], "Target").unwrap(), None);
    }

    #[test]
    fn test_self_is_excluded() {
        let (h, ids) = class_with_members(&[(NodeKind::Property, "Health")]);
        assert_eq!(resolve_conflict(&h, ids[0], "Health".into()).unwrap(), "Health");
    }

    #[test]
    fn test_root_has_no_siblings() {
        let mut h = Hierarchy::new();
        let root = h.add_root(NodeKind::Package, "/Script/Engine");
        assert_eq!(resolve_conflict(&h, root, "Engine".into()).unwrap(), "Engine");
    }

    #[test]
    fn test_empty_sibling_name_is_fatal() {
        let (h, ids) = class_with_members(&[
            (NodeKind::Property, "Health"),
            (NodeKind::Function, ""),
        ]);
        let err = find_conflict(&h, ids[0], "Health").unwrap_err();
        assert!(matches!(err, NamingError::EmptyEngineName { .. }));
    }
}
