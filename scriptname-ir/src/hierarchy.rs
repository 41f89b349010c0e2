//! Arena-backed reflected type hierarchy.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{DelegateKind, NodeKind};

/// Ordered metadata annotations of a node (annotation key -> value).
pub type Metadata = IndexMap<String, String>;

/// Separator between segments of a node path.
const PATH_SEPARATOR: &str = "::";

/// Handle to a node inside a [`Hierarchy`].
///
/// Handles are only meaningful for the hierarchy that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A reflected node.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    engine_name: String,
    metadata: Metadata,
    outer: Option<NodeId>,
    children: Vec<NodeId>,
    super_type: Option<NodeId>,
    delegate: Option<DelegateKind>,
    package: Option<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, engine_name: String, outer: Option<NodeId>) -> Self {
        Self {
            kind,
            engine_name,
            metadata: Metadata::new(),
            outer,
            children: Vec::new(),
            super_type: None,
            delegate: None,
            package: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The authoritative name assigned by the engine.
    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Look up a single annotation value.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// The immediately enclosing node, `None` for root packages.
    pub fn outer(&self) -> Option<NodeId> {
        self.outer
    }

    /// Directly owned nodes in declaration order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Declared super type of a class, struct, or interface.
    pub fn super_type(&self) -> Option<NodeId> {
        self.super_type
    }

    /// Delegate flavour when this function is a delegate signature.
    pub fn delegate(&self) -> Option<DelegateKind> {
        self.delegate
    }

    /// Returns true if this node is a single- or multi-cast delegate signature.
    pub fn is_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Package a header group belongs to.
    pub fn package(&self) -> Option<NodeId> {
        self.package
    }
}

/// The reflected type hierarchy.
///
/// Built once through the `add_*`/`set_*` methods, then only read while names
/// are resolved.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Hierarchy {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty hierarchy with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            roots: Vec::new(),
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add a node without an enclosing node.
    pub fn add_root(&mut self, kind: NodeKind, engine_name: impl Into<String>) -> NodeId {
        let id = self.push(Node::new(kind, engine_name.into(), None));
        self.roots.push(id);
        id
    }

    /// Add a node owned by `outer`, appended after its existing children.
    pub fn add_child(
        &mut self,
        outer: NodeId,
        kind: NodeKind,
        engine_name: impl Into<String>,
    ) -> NodeId {
        let id = self.push(Node::new(kind, engine_name.into(), Some(outer)));
        self.nodes[outer.index()].children.push(id);
        id
    }

    /// Set a metadata annotation, replacing any previous value for the key.
    pub fn set_metadata(&mut self, id: NodeId, key: impl Into<String>, value: impl Into<String>) {
        self.nodes[id.index()]
            .metadata
            .insert(key.into(), value.into());
    }

    pub fn set_super_type(&mut self, id: NodeId, super_type: NodeId) {
        self.nodes[id.index()].super_type = Some(super_type);
    }

    pub fn set_delegate(&mut self, id: NodeId, delegate: DelegateKind) {
        self.nodes[id.index()].delegate = Some(delegate);
    }

    /// Attach a header group to the package its types belong to.
    pub fn set_package(&mut self, header: NodeId, package: NodeId) {
        self.nodes[header.index()].package = Some(package);
    }

    /// Get a node by handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle was created by a different hierarchy.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root nodes in declaration order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate all nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i as u32), node))
    }

    /// All nodes in depth-first declaration order.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }

    /// Other children of the node's owner, excluding the node itself.
    ///
    /// Empty for root nodes.
    pub fn siblings(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let owned: &[NodeId] = match self.node(id).outer {
            Some(outer) => &self.node(outer).children,
            None => &[],
        };
        owned.iter().copied().filter(move |&sibling| sibling != id)
    }

    /// Walk the ownership chain upwards, starting at the node's owner.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: self.node(id).outer,
        }
    }

    /// Check whether `id` is, or inherits from, a type with the given engine name.
    pub fn is_child_of_named(&self, id: NodeId, base_name: &str) -> bool {
        let mut current = Some(id);
        // Bounded by the node count so a malformed super chain cannot loop.
        for _ in 0..=self.nodes.len() {
            match current {
                Some(node) if self.node(node).engine_name == base_name => return true,
                Some(node) => current = self.node(node).super_type,
                None => return false,
            }
        }
        false
    }

    /// Find the first class, struct, or interface with the given engine name.
    pub fn find_type(&self, engine_name: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.kind.has_super_type() && node.engine_name == engine_name)
            .map(|(id, _)| id)
    }

    /// Find a package by engine name (e.g. "/Script/Engine") or short name (e.g. "Engine").
    pub fn find_package(&self, name: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| {
                node.kind == NodeKind::Package
                    && (node.engine_name == name || package_short_name(&node.engine_name) == name)
            })
            .map(|(id, _)| id)
    }

    /// Short name of a package node: the last `/` segment of its engine name.
    pub fn short_name(&self, id: NodeId) -> &str {
        package_short_name(&self.node(id).engine_name)
    }

    /// Path of a node from its root, e.g. `Engine::Actor.h::AActor::bHidden`.
    ///
    /// Packages appear by short name.
    pub fn path(&self, id: NodeId) -> String {
        let mut segments: Vec<&str> = self
            .ancestors(id)
            .map(|ancestor| self.segment(ancestor))
            .collect();
        segments.reverse();
        segments.push(self.segment(id));
        segments.join(PATH_SEPARATOR)
    }

    /// Resolve a path produced by [`Hierarchy::path`] back to a node.
    pub fn find_by_path(&self, path: &str) -> Option<NodeId> {
        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next()?;
        let mut current = self
            .roots
            .iter()
            .copied()
            .find(|&root| self.segment(root) == first || self.node(root).engine_name == first)?;
        for segment in segments {
            current = self
                .node(current)
                .children
                .iter()
                .copied()
                .find(|&child| self.segment(child) == segment)?;
        }
        Some(current)
    }

    fn segment(&self, id: NodeId) -> &str {
        let node = self.node(id);
        match node.kind {
            NodeKind::Package => package_short_name(&node.engine_name),
            _ => &node.engine_name,
        }
    }
}

fn package_short_name(engine_name: &str) -> &str {
    engine_name.rsplit('/').next().unwrap_or(engine_name)
}

/// Iterator over the ownership chain of a node.
pub struct Ancestors<'a> {
    hierarchy: &'a Hierarchy,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.hierarchy.node(current).outer;
        Some(current)
    }
}
