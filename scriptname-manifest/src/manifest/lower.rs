//! Lowering of manifest declarations into the reflected hierarchy.

use scriptname_ir::{Hierarchy, NodeId, NodeKind};
use toml::Spanned;

use super::{Manifest, NodeDecl};
use crate::{Result, error::SourceContext};

/// Build the hierarchy, checking placement and resolving name references.
pub(crate) fn lower(manifest: &Manifest, ctx: &SourceContext) -> Result<Hierarchy> {
    let mut lowering = Lowering {
        ctx,
        hierarchy: Hierarchy::with_capacity(manifest.node_count()),
        super_refs: Vec::new(),
        header_refs: Vec::new(),
    };

    for decl in &manifest.nodes {
        let kind = *decl.kind.get_ref();
        if kind != NodeKind::Package {
            return Err(ctx.misplaced_node_error(
                decl.name.get_ref(),
                kind.as_str(),
                "the manifest root",
                decl.name.span(),
            ));
        }
        lowering.declare(None, decl)?;
    }

    lowering.resolve()
}

/// Whether a node of kind `parent` may own a node of kind `child`.
fn can_own(parent: NodeKind, child: NodeKind) -> bool {
    match parent {
        NodeKind::Package | NodeKind::HeaderGroup => {
            child == NodeKind::HeaderGroup || child == NodeKind::Function || child.is_type()
        }
        NodeKind::Class | NodeKind::Struct | NodeKind::Interface | NodeKind::NativeInterface => {
            matches!(child, NodeKind::Property | NodeKind::Function)
        }
        NodeKind::Function => child == NodeKind::Parameter,
        NodeKind::Enum | NodeKind::Property | NodeKind::Parameter => false,
    }
}

struct Lowering<'a> {
    ctx: &'a SourceContext,
    hierarchy: Hierarchy,
    /// Super type references, resolved once every node exists.
    super_refs: Vec<(NodeId, &'a Spanned<String>)>,
    /// Header groups and their explicit package, if any.
    header_refs: Vec<(NodeId, Option<&'a Spanned<String>>)>,
}

impl<'a> Lowering<'a> {
    fn declare(&mut self, outer: Option<NodeId>, decl: &'a NodeDecl) -> Result<NodeId> {
        let kind = *decl.kind.get_ref();
        self.check_attributes(kind, decl)?;

        let name = decl.name.get_ref().clone();
        let id = match outer {
            Some(outer) => self.hierarchy.add_child(outer, kind, name),
            None => self.hierarchy.add_root(kind, name),
        };

        for (key, value) in &decl.metadata {
            self.hierarchy.set_metadata(id, key.clone(), value.clone());
        }
        if let Some(delegate) = &decl.delegate {
            self.hierarchy.set_delegate(id, *delegate.get_ref());
        }
        if let Some(super_type) = &decl.super_type {
            self.super_refs.push((id, super_type));
        }
        if kind == NodeKind::HeaderGroup {
            self.header_refs.push((id, decl.package.as_ref()));
        }

        for child in &decl.children {
            let child_kind = *child.kind.get_ref();
            if !can_own(kind, child_kind) {
                return Err(self.ctx.misplaced_node_error(
                    child.name.get_ref(),
                    child_kind.as_str(),
                    format!("{} '{}'", kind, decl.name.get_ref()),
                    child.name.span(),
                ));
            }
            self.declare(Some(id), child)?;
        }

        Ok(id)
    }

    fn check_attributes(&self, kind: NodeKind, decl: &NodeDecl) -> Result<()> {
        if let Some(super_type) = &decl.super_type
            && !kind.has_super_type()
        {
            return Err(self
                .ctx
                .invalid_attribute_error("super", kind.as_str(), super_type.span()));
        }
        if let Some(delegate) = &decl.delegate
            && kind != NodeKind::Function
        {
            return Err(self
                .ctx
                .invalid_attribute_error("delegate", kind.as_str(), delegate.span()));
        }
        if let Some(package) = &decl.package
            && kind != NodeKind::HeaderGroup
        {
            return Err(self
                .ctx
                .invalid_attribute_error("package", kind.as_str(), package.span()));
        }
        Ok(())
    }

    fn resolve(mut self) -> Result<Hierarchy> {
        for (id, name) in &self.super_refs {
            let super_type = self.hierarchy.find_type(name.get_ref()).ok_or_else(|| {
                self.ctx
                    .unknown_reference_error("super type", name.get_ref(), name.span())
            })?;
            self.hierarchy.set_super_type(*id, super_type);
        }

        for (header, package) in &self.header_refs {
            let package_id = match package {
                Some(name) => self.hierarchy.find_package(name.get_ref()).ok_or_else(|| {
                    self.ctx
                        .unknown_reference_error("package", name.get_ref(), name.span())
                })?,
                None => self
                    .hierarchy
                    .ancestors(*header)
                    .find(|&ancestor| self.hierarchy.node(ancestor).kind() == NodeKind::Package)
                    .ok_or_else(|| {
                        self.ctx.validation_error(
                            format!(
                                "header group '{}' has no enclosing package",
                                self.hierarchy.node(*header).engine_name()
                            ),
                            None,
                        )
                    })?,
            };
            self.hierarchy.set_package(*header, package_id);
        }

        Ok(self.hierarchy)
    }
}
