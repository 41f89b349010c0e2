//! Delegate signature naming.

use scriptname_ir::{Hierarchy, NodeId};

use super::escape_keyword;

/// Suffix the engine appends to the functions backing delegate types.
pub const DELEGATE_SIGNATURE_SUFFIX: &str = "__DelegateSignature";

/// Provides the name of the type generated for a delegate signature.
///
/// Implementations must return a non-empty, keyword-safe identifier; an
/// empty name aborts resolution.
pub trait DelegateNamer: Send + Sync {
    /// Name the delegate type backed by `function`.
    fn delegate_name(&self, hierarchy: &Hierarchy, function: NodeId) -> String;
}

impl<F> DelegateNamer for F
where
    F: Fn(&Hierarchy, NodeId) -> String + Send + Sync,
{
    fn delegate_name(&self, hierarchy: &Hierarchy, function: NodeId) -> String {
        self(hierarchy, function)
    }
}

/// Names delegates after their signature function.
///
/// `OnDestroyed__DelegateSignature` declared in `AActor` becomes
/// `AActor_OnDestroyed`; a delegate declared at header level keeps the bare
/// `OnDestroyed`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureDelegateNamer;

impl DelegateNamer for SignatureDelegateNamer {
    fn delegate_name(&self, hierarchy: &Hierarchy, function: NodeId) -> String {
        let node = hierarchy.node(function);
        let engine_name = node.engine_name();
        let base = engine_name
            .strip_suffix(DELEGATE_SIGNATURE_SUFFIX)
            .unwrap_or(engine_name);

        let owner = node.outer().map(|outer| hierarchy.node(outer));
        match owner {
            Some(owner) if owner.kind().is_class_like() && !base.is_empty() => {
                format!("{}_{}", owner.engine_name(), base)
            }
            _ => escape_keyword(base),
        }
    }
}

#[cfg(test)]
mod tests {
    use scriptname_ir::NodeKind;

    use super::*;

    #[test]
    fn test_header_level_delegate() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let header = h.add_child(package, NodeKind::HeaderGroup, "Delegates.h");
        let delegate = h.add_child(header, NodeKind::Function, "OnTimerFired__DelegateSignature");

        assert_eq!(SignatureDelegateNamer.delegate_name(&h, delegate), "OnTimerFired");
    }

    #[test]
    fn test_class_level_delegate_is_owner_qualified() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let actor = h.add_child(package, NodeKind::Class, "AActor");
        let delegate = h.add_child(actor, NodeKind::Function, "OnDestroyed__DelegateSignature");

        assert_eq!(SignatureDelegateNamer.delegate_name(&h, delegate), "AActor_OnDestroyed");
    }

    #[test]
    fn test_name_without_suffix_is_kept() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let delegate = h.add_child(package, NodeKind::Function, "OnTick");

        assert_eq!(SignatureDelegateNamer.delegate_name(&h, delegate), "OnTick");
    }

    #[test]
    fn test_bare_suffix_gives_empty_name() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let actor = h.add_child(package, NodeKind::Class, "AActor");
        let delegate = h.add_child(actor, NodeKind::Function, "__DelegateSignature");

        assert_eq!(SignatureDelegateNamer.delegate_name(&h, delegate), "");
    }

    #[test]
    fn test_closure_namer() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/Engine");
        let delegate = h.add_child(package, NodeKind::Function, "OnTick");

        let namer = |h: &Hierarchy, id: NodeId| format!("F{}", h.node(id).engine_name());
        assert_eq!(namer.delegate_name(&h, delegate), "FOnTick");
    }
}
