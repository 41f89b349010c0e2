//! The name synthesis façade.

use scriptname_core::lower_first;
use scriptname_ir::{Hierarchy, NodeId, NodeKind};
use scriptname_manifest::NamingConfig;
use tracing::debug;

use super::{
    ConflictOutcome, DelegateNamer, NameKind, SignatureDelegateNamer, check_conflict,
    escape_keyword,
    explain::{Explanation, Step, Trace},
    is_keyword, namespace, resolve_script_name, script_name, scriptify,
};
use crate::{NamingError, Result};

/// Resolves the generated identifiers of a hierarchy's nodes.
///
/// Every query is a pure function of the hierarchy, the configuration, and
/// the delegate name provider; nothing is cached, so callers may memoize
/// freely or resolve disjoint subtrees from several threads.
///
/// # Example
///
/// ```ignore
/// let mapper = NameMapper::new(&reflection.hierarchy, &reflection.naming);
/// let name = mapper.name(property)?;
/// let qualified = mapper.full_name(class)?;
/// ```
#[derive(Clone, Copy)]
pub struct NameMapper<'h> {
    hierarchy: &'h Hierarchy,
    config: &'h NamingConfig,
    delegates: &'h dyn DelegateNamer,
}

impl<'h> NameMapper<'h> {
    /// Create a mapper using [`SignatureDelegateNamer`] for delegates.
    pub fn new(hierarchy: &'h Hierarchy, config: &'h NamingConfig) -> Self {
        Self {
            hierarchy,
            config,
            delegates: &SignatureDelegateNamer,
        }
    }

    /// Replace the delegate name provider.
    pub fn with_delegate_namer(mut self, delegates: &'h dyn DelegateNamer) -> Self {
        self.delegates = delegates;
        self
    }

    pub fn hierarchy(&self) -> &'h Hierarchy {
        self.hierarchy
    }

    pub fn config(&self) -> &'h NamingConfig {
        self.config
    }

    /// Resolve the identifier of any node, dispatching on its kind.
    pub fn name(&self, id: NodeId) -> Result<String> {
        self.name_traced(id, &mut Trace::disabled())
    }

    /// Type name of a class, struct, interface, or enum.
    pub fn struct_name(&self, id: NodeId) -> Result<String> {
        self.require_engine_name(id)?;
        Ok(self.struct_name_traced(id, &mut Trace::disabled()))
    }

    /// Method or delegate name of a function.
    pub fn function_name(&self, id: NodeId) -> Result<String> {
        self.require_engine_name(id)?;
        self.function_name_traced(id, &mut Trace::disabled())
    }

    pub fn property_name(&self, id: NodeId) -> Result<String> {
        self.require_engine_name(id)?;
        self.property_name_traced(id, &mut Trace::disabled())
    }

    pub fn parameter_name(&self, id: NodeId) -> Result<String> {
        self.require_engine_name(id)?;
        self.parameter_name_traced(id, &mut Trace::disabled())
    }

    /// Namespace of a node, e.g. `UnrealSharp.Engine`.
    pub fn namespace(&self, id: NodeId) -> Result<String> {
        namespace(self.hierarchy, id, &self.config.namespace_prefix)
    }

    /// Namespace-qualified type name, e.g. `UnrealSharp.Engine.AActor`.
    pub fn full_name(&self, id: NodeId) -> Result<String> {
        Ok(format!("{}.{}", self.namespace(id)?, self.struct_name(id)?))
    }

    /// Returns true if the node is a delegate signature function.
    pub fn is_delegate(&self, id: NodeId) -> bool {
        let node = self.hierarchy.node(id);
        node.kind() == NodeKind::Function && node.is_delegate()
    }

    /// Resolve a node's identifier, recording every decision taken.
    pub fn explain(&self, id: NodeId) -> Result<Explanation> {
        let mut trace = Trace::enabled();
        let name = self.name_traced(id, &mut trace)?;
        let node = self.hierarchy.node(id);
        Ok(Explanation {
            path: self.hierarchy.path(id),
            kind: node.kind(),
            engine_name: node.engine_name().to_string(),
            steps: trace.into_steps(),
            name,
        })
    }

    fn name_traced(&self, id: NodeId, trace: &mut Trace) -> Result<String> {
        self.require_engine_name(id)?;
        match self.hierarchy.node(id).kind() {
            NodeKind::Package => {
                let short_name = self.hierarchy.short_name(id);
                if short_name.is_empty() {
                    return Err(self.empty_identifier(id));
                }
                Ok(short_name.to_string())
            }
            NodeKind::HeaderGroup => Ok(self.hierarchy.node(id).engine_name().to_string()),
            NodeKind::Class
            | NodeKind::Struct
            | NodeKind::Interface
            | NodeKind::NativeInterface
            | NodeKind::Enum => Ok(self.struct_name_traced(id, trace)),
            NodeKind::Function => self.function_name_traced(id, trace),
            NodeKind::Property => self.property_name_traced(id, trace),
            NodeKind::Parameter => self.parameter_name_traced(id, trace),
        }
    }

    fn require_engine_name(&self, id: NodeId) -> Result<()> {
        if self.hierarchy.node(id).engine_name().is_empty() {
            return Err(self.empty_name(id));
        }
        Ok(())
    }

    fn empty_name(&self, id: NodeId) -> NamingError {
        NamingError::EmptyEngineName {
            path: self.hierarchy.path(id),
        }
    }

    fn empty_identifier(&self, id: NodeId) -> NamingError {
        NamingError::EmptyName {
            path: self.hierarchy.path(id),
        }
    }

    fn scriptify_node(&self, id: NodeId, name: &str, kind: NameKind) -> Result<String> {
        scriptify(name, kind).map_err(|_| self.empty_name(id))
    }

    fn is_interface_root(&self, id: NodeId) -> bool {
        let node = self.hierarchy.node(id);
        node.kind().has_super_type() && node.engine_name() == self.config.interface_root
    }

    fn is_function_library(&self, id: NodeId) -> bool {
        self.hierarchy.node(id).kind() == NodeKind::Class
            && self
                .hierarchy
                .is_child_of_named(id, &self.config.function_library)
    }

    fn struct_name_traced(&self, id: NodeId, trace: &mut Trace) -> String {
        let node = self.hierarchy.node(id);

        if node.kind().is_interface() || self.is_interface_root(id) {
            let script = resolve_script_name(node);
            let name = format!("I{}", script.name);
            trace.record(|| Step::ScriptName {
                name: script.name.clone(),
                source: script.source,
            });
            trace.record(|| Step::InterfacePrefix { name: name.clone() });
            return name;
        }

        if self.is_function_library(id) {
            let script = resolve_script_name(node);
            trace.record(|| Step::ScriptName {
                name: script.name.clone(),
                source: script.source,
            });
            trace.record(|| Step::FunctionLibrary {
                name: script.name.clone(),
            });
            return script.name;
        }

        let name = node.engine_name().to_string();
        trace.record(|| Step::EngineName { name: name.clone() });
        name
    }

    fn function_name_traced(&self, id: NodeId, trace: &mut Trace) -> Result<String> {
        let node = self.hierarchy.node(id);
        let script = resolve_script_name(node);
        trace.record(|| Step::ScriptName {
            name: script.name.clone(),
            source: script.source,
        });
        let mut name = script.name;

        if node.is_delegate() {
            name = self.delegates.delegate_name(self.hierarchy, id);
            if name.is_empty() {
                return Err(NamingError::EmptyDelegateName {
                    path: self.hierarchy.path(id),
                });
            }
            debug!(function = %self.hierarchy.path(id), delegate = %name, "named delegate");
            trace.record(|| Step::DelegateName { name: name.clone() });
        }

        let infix = self.config.legacy_infix.as_str();
        if !infix.is_empty() && name.contains(infix) {
            name = name.replace(infix, "");
            trace.record(|| Step::LegacyInfixRemoved {
                infix: infix.to_string(),
                name: name.clone(),
            });
            if name.is_empty() {
                return Err(self.empty_identifier(id));
            }
        }

        let owned_by_class = node
            .outer()
            .is_some_and(|outer| self.hierarchy.node(outer).kind().is_class_like());
        if !owned_by_class {
            return Ok(name);
        }

        self.resolve_conflict_traced(id, name, trace)
    }

    fn property_name_traced(&self, id: NodeId, trace: &mut Trace) -> Result<String> {
        let node = self.hierarchy.node(id);
        let script = resolve_script_name(node);
        trace.record(|| Step::ScriptName {
            name: script.name.clone(),
            source: script.source,
        });

        let mut name = self.scriptify_node(id, &script.name, NameKind::Property)?;
        trace.record(|| Step::Scriptified {
            kind: NameKind::Property,
            name: name.clone(),
        });

        let owner_name = node
            .outer()
            .map(|outer| self.hierarchy.node(outer).engine_name());
        if owner_name == Some(name.as_str()) || is_keyword(&name) {
            let prefix = self.config.property_prefix.as_str();
            name = format!("{}{}", prefix, name);
            trace.record(|| Step::PropertyPrefix {
                prefix: prefix.to_string(),
                name: name.clone(),
            });
        }

        self.resolve_conflict_traced(id, name, trace)
    }

    fn parameter_name_traced(&self, id: NodeId, trace: &mut Trace) -> Result<String> {
        let node = self.hierarchy.node(id);
        let script = resolve_script_name(node);
        trace.record(|| Step::ScriptName {
            name: script.name.clone(),
            source: script.source,
        });

        let name = self.scriptify_node(id, &script.name, NameKind::Parameter)?;
        trace.record(|| Step::Scriptified {
            kind: NameKind::Parameter,
            name: name.clone(),
        });

        let owned_by_function = node
            .outer()
            .is_some_and(|outer| self.hierarchy.node(outer).kind() == NodeKind::Function);
        if !owned_by_function {
            return Ok(name);
        }

        for sibling in self.hierarchy.siblings(id) {
            let sibling_node = self.hierarchy.node(sibling);
            if sibling_node.kind() != NodeKind::Parameter {
                continue;
            }
            let other =
                self.scriptify_node(sibling, &script_name(sibling_node), NameKind::Parameter)?;
            if other == name {
                let fallback = escape_keyword(&lower_first(node.engine_name()));
                debug!(
                    parameter = %self.hierarchy.path(id),
                    sibling = %self.hierarchy.path(sibling),
                    fallback = %fallback,
                    "parameter name conflict"
                );
                trace.record(|| Step::ParameterFallback {
                    sibling: self.hierarchy.path(sibling),
                    name: fallback.clone(),
                });
                return Ok(fallback);
            }
        }

        Ok(name)
    }

    fn resolve_conflict_traced(
        &self,
        id: NodeId,
        candidate: String,
        trace: &mut Trace,
    ) -> Result<String> {
        let outcome = check_conflict(self.hierarchy, id, candidate)?;
        if let ConflictOutcome::Fallback { name, sibling } = &outcome {
            trace.record(|| Step::ConflictFallback {
                sibling: self.hierarchy.path(*sibling),
                name: name.clone(),
            });
        }
        Ok(outcome.into_name())
    }
}

impl std::fmt::Debug for NameMapper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameMapper")
            .field("nodes", &self.hierarchy.len())
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use scriptname_ir::DelegateKind;

    use super::*;
    use crate::naming::ScriptNameSource;

    struct Fixture {
        hierarchy: Hierarchy,
        config: NamingConfig,
        package: NodeId,
        header: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut hierarchy = Hierarchy::new();
            let package = hierarchy.add_root(NodeKind::Package, "/Script/Engine");
            let header = hierarchy.add_child(package, NodeKind::HeaderGroup, "Actor.h");
            hierarchy.set_package(header, package);
            Self {
                hierarchy,
                config: NamingConfig::default(),
                package,
                header,
            }
        }

        fn add(&mut self, outer: NodeId, kind: NodeKind, name: &str) -> NodeId {
            self.hierarchy.add_child(outer, kind, name)
        }

        fn class(&mut self, name: &str) -> NodeId {
            let header = self.header;
            self.add(header, NodeKind::Class, name)
        }

        fn mapper(&self) -> NameMapper<'_> {
            NameMapper::new(&self.hierarchy, &self.config)
        }
    }

    #[test]
    fn test_bool_property_and_parameter() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let property = f.add(actor, NodeKind::Property, "bIsValid");
        let function = f.add(actor, NodeKind::Function, "SetValid");
        let parameter = f.add(function, NodeKind::Parameter, "bIsValid");

        let mapper = f.mapper();
        assert_eq!(mapper.property_name(property).unwrap(), "IsValid");
        assert_eq!(mapper.parameter_name(parameter).unwrap(), "isValid");
    }

    #[test]
    fn test_input_parameter_escapes_keyword() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let function = f.add(actor, NodeKind::Function, "Attach");
        let parameter = f.add(function, NodeKind::Parameter, "InObject");

        assert_eq!(f.mapper().parameter_name(parameter).unwrap(), "_object");
    }

    #[test]
    fn test_class_keeps_engine_name_despite_script_name() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        f.hierarchy.set_metadata(actor, "ScriptName", "Actor");

        let mapper = f.mapper();
        assert_eq!(mapper.struct_name(actor).unwrap(), "AActor");
        assert_eq!(mapper.name(actor).unwrap(), "AActor");
    }

    #[test]
    fn test_interface_marker() {
        let mut f = Fixture::new();
        let header = f.header;
        let interface = f.add(header, NodeKind::Interface, "Interactable");
        let native = f.add(header, NodeKind::NativeInterface, "Damageable");
        f.hierarchy.set_metadata(native, "DisplayName", "Can Take Damage");
        let root = f.class("UInterface");

        let mapper = f.mapper();
        assert_eq!(mapper.struct_name(interface).unwrap(), "IInteractable");
        assert_eq!(mapper.struct_name(native).unwrap(), "ICanTakeDamage");
        assert_eq!(mapper.struct_name(root).unwrap(), "IUInterface");
    }

    #[test]
    fn test_function_library_uses_script_name() {
        let mut f = Fixture::new();
        let base = f.class("UBlueprintFunctionLibrary");
        let library = f.class("UKismetMathLibrary");
        f.hierarchy.set_super_type(library, base);
        f.hierarchy.set_metadata(library, "ScriptName", "Math Library");
        let plain = f.class("UGameplayStatics");
        f.hierarchy.set_metadata(plain, "ScriptName", "Statics");

        let mapper = f.mapper();
        assert_eq!(mapper.struct_name(library).unwrap(), "MathLibrary");
        assert_eq!(mapper.struct_name(plain).unwrap(), "UGameplayStatics");
    }

    #[test]
    fn test_sibling_properties_fall_back_independently() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let first = f.add(actor, NodeKind::Property, "bValue");
        let second = f.add(actor, NodeKind::Property, "Value_1");
        f.hierarchy.set_metadata(second, "ScriptName", "Value");

        let mapper = f.mapper();
        assert_eq!(mapper.property_name(first).unwrap(), "bValue");
        assert_eq!(mapper.property_name(second).unwrap(), "Value_1");
    }

    #[test]
    fn test_property_shadowing_owner_is_prefixed() {
        let mut f = Fixture::new();
        let header = f.header;
        let owner = f.add(header, NodeKind::Struct, "Color");
        let property = f.add(owner, NodeKind::Property, "Color");

        assert_eq!(f.mapper().property_name(property).unwrap(), "K2_Color");
    }

    #[test]
    fn test_property_prefix_is_configurable() {
        let mut f = Fixture::new();
        f.config.property_prefix = "Prop_".into();
        let header = f.header;
        let owner = f.add(header, NodeKind::Struct, "Color");
        let property = f.add(owner, NodeKind::Property, "Color");

        assert_eq!(f.mapper().property_name(property).unwrap(), "Prop_Color");
    }

    #[test]
    fn test_function_legacy_infix_removed() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let function = f.add(actor, NodeKind::Function, "K2_DestroyActor");

        assert_eq!(f.mapper().function_name(function).unwrap(), "DestroyActor");
    }

    #[test]
    fn test_function_that_is_only_the_legacy_infix_is_fatal() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let function = f.add(actor, NodeKind::Function, "K2_");

        let err = f.mapper().function_name(function).unwrap_err();
        assert_eq!(
            err,
            NamingError::EmptyName {
                path: "Engine::Actor.h::AActor::K2_".into()
            }
        );
    }

    #[test]
    fn test_function_conflicting_with_property_falls_back() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let function = f.add(actor, NodeKind::Function, "K2_Hidden");
        f.add(actor, NodeKind::Property, "bHidden");

        assert_eq!(f.mapper().function_name(function).unwrap(), "K2_Hidden");
    }

    #[test]
    fn test_header_function_skips_conflicts() {
        let mut f = Fixture::new();
        let header = f.header;
        let function = f.add(header, NodeKind::Function, "Tick");
        f.add(header, NodeKind::Function, "Tick");

        assert_eq!(f.mapper().function_name(function).unwrap(), "Tick");
    }

    #[test]
    fn test_delegate_named_by_provider() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let delegate = f.add(actor, NodeKind::Function, "OnDestroyed__DelegateSignature");
        f.hierarchy
            .set_delegate(delegate, DelegateKind::MultiCast);

        let mapper = f.mapper();
        assert!(mapper.is_delegate(delegate));
        assert_eq!(mapper.function_name(delegate).unwrap(), "AActor_OnDestroyed");

        let custom = |_: &Hierarchy, _: NodeId| "FOnDestroyed".to_string();
        let mapper = mapper.with_delegate_namer(&custom);
        assert_eq!(mapper.function_name(delegate).unwrap(), "FOnDestroyed");
    }

    #[test]
    fn test_empty_delegate_name_is_fatal() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let delegate = f.add(actor, NodeKind::Function, "OnDestroyed__DelegateSignature");
        f.hierarchy
            .set_delegate(delegate, DelegateKind::SingleCast);

        let empty = |_: &Hierarchy, _: NodeId| String::new();
        let err = f
            .mapper()
            .with_delegate_namer(&empty)
            .function_name(delegate)
            .unwrap_err();
        assert_eq!(
            err,
            NamingError::EmptyDelegateName {
                path: "Engine::Actor.h::AActor::OnDestroyed__DelegateSignature".into()
            }
        );
    }

    #[test]
    fn test_parameter_collision_reverts_to_engine_name() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let function = f.add(actor, NodeKind::Function, "SetHidden");
        let first = f.add(function, NodeKind::Parameter, "bHidden");
        let second = f.add(function, NodeKind::Parameter, "Hidden");

        let mapper = f.mapper();
        assert_eq!(mapper.parameter_name(first).unwrap(), "bHidden");
        assert_eq!(mapper.parameter_name(second).unwrap(), "hidden");
    }

    #[test]
    fn test_namespace_and_full_name() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let property = f.add(actor, NodeKind::Property, "bHidden");

        let mapper = f.mapper();
        assert_eq!(mapper.namespace(actor).unwrap(), "UnrealSharp.Engine");
        assert_eq!(mapper.namespace(property).unwrap(), "UnrealSharp.Engine");
        assert_eq!(mapper.full_name(actor).unwrap(), "UnrealSharp.Engine.AActor");
        assert_eq!(mapper.name(f.package).unwrap(), "Engine");
        assert_eq!(mapper.name(f.header).unwrap(), "Actor.h");
    }

    #[test]
    fn test_missing_package_is_fatal() {
        let mut hierarchy = Hierarchy::new();
        let package = hierarchy.add_root(NodeKind::Package, "/Script/Engine");
        let header = hierarchy.add_child(package, NodeKind::HeaderGroup, "Actor.h");
        let actor = hierarchy.add_child(header, NodeKind::Class, "AActor");
        let config = NamingConfig::default();

        let err = NameMapper::new(&hierarchy, &config)
            .full_name(actor)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to find package name for 'Engine::Actor.h::AActor'"
        );
    }

    #[test]
    fn test_empty_engine_name_is_fatal() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let property = f.add(actor, NodeKind::Property, "");

        let err = f.mapper().name(property).unwrap_err();
        assert!(matches!(err, NamingError::EmptyEngineName { .. }));
        assert_eq!(err.path(), "Engine::Actor.h::AActor::");
    }

    #[test]
    fn test_package_with_empty_short_name_is_fatal() {
        let mut h = Hierarchy::new();
        let package = h.add_root(NodeKind::Package, "/Script/");
        let config = NamingConfig::default();

        let err = NameMapper::new(&h, &config).name(package).unwrap_err();
        assert!(matches!(err, NamingError::EmptyName { .. }));
    }

    #[test]
    fn test_explain_records_steps() {
        let mut f = Fixture::new();
        let actor = f.class("AActor");
        let property = f.add(actor, NodeKind::Property, "bValue");
        f.add(actor, NodeKind::Function, "Value");

        let explanation = f.mapper().explain(property).unwrap();
        assert_eq!(explanation.name, "bValue");
        assert_eq!(explanation.path, "Engine::Actor.h::AActor::bValue");
        assert_eq!(
            explanation.steps,
            vec![
                Step::ScriptName {
                    name: "bValue".into(),
                    source: ScriptNameSource::EngineName,
                },
                Step::Scriptified {
                    kind: NameKind::Property,
                    name: "Value".into(),
                },
                Step::ConflictFallback {
                    sibling: "Engine::Actor.h::AActor::Value".into(),
                    name: "bValue".into(),
                },
            ]
        );
    }

    #[test]
    fn test_mapper_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NameMapper<'static>>();
    }
}
