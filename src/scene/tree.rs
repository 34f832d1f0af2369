use crate::animation::props::{Property, Value};
use crate::scene::node::{Node, NodeId};
use crate::scene::selector::Selector;
use crate::scene::style::{Style, TransformOrigin};
use fxhash::FxHashSet;

/// Arena-backed element tree.
///
/// Removed nodes keep their slot so ids stay stable; they are simply no longer
/// reachable from a root and never match a query.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    dirty: FxHashSet<NodeId>,
    revision: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_root(&mut self, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = None;
        node.attached = true;
        self.nodes.push(node);
        self.roots.push(id);
        self.revision += 1;
        id
    }

    /// Append `node` as the last child of `parent`. Appending under a detached
    /// parent yields a detached node.
    pub fn append(&mut self, parent: NodeId, mut node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent_attached = self.get(parent).map(Node::is_attached).unwrap_or(false);
        node.parent = Some(parent);
        node.attached = parent_attached;
        self.nodes.push(node);
        if let Some(parent_node) = self.nodes.get_mut(parent.0) {
            parent_node.children.push(id);
        }
        self.revision += 1;
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Whether `id` is part of the visible tree
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).map(Node::is_attached).unwrap_or(false)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn style(&self, id: NodeId) -> Option<&Style> {
        self.get(id).map(|node| &node.style)
    }

    /// Write one style property; unknown or detached nodes are ignored.
    pub fn set_property(&mut self, id: NodeId, property: Property, value: Value) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if !node.attached {
                return;
            }
            node.style.set(property, value);
            self.dirty.insert(id);
        }
    }

    pub fn set_origin(&mut self, id: NodeId, origin: TransformOrigin) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            if node.attached && node.style.origin != origin {
                node.style.origin = origin;
                self.dirty.insert(id);
            }
        }
    }

    /// Detach `id` and its subtree. Returns false if it was already gone.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }

        match self.nodes[id.0].parent {
            Some(parent) => self.nodes[parent.0].children.retain(|child| *child != id),
            None => self.roots.retain(|root| *root != id),
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &mut self.nodes[current.0];
            node.attached = false;
            stack.extend(node.children.iter().copied());
            self.dirty.remove(&current);
        }
        self.revision += 1;
        true
    }

    /// Attached nodes in document order
    pub fn walk(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.get(id) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }

    pub fn query(&self, selector: &Selector) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .filter(|id| selector.matches(self, *id))
            .collect()
    }

    /// Query by selector text. A malformed selector matches nothing.
    pub fn select(&self, selector: &str) -> Vec<NodeId> {
        match Selector::parse(selector) {
            Ok(selector) => self.query(&selector),
            Err(e) => {
                log::warn!("{}", e);
                Vec::new()
            }
        }
    }

    pub fn first(&self, selector: &str) -> Option<NodeId> {
        self.select(selector).into_iter().next()
    }

    /// Nodes whose style changed since the last call, in id order
    pub fn take_dirty(&mut self) -> Vec<NodeId> {
        let mut dirty: Vec<NodeId> = self.dirty.drain().collect();
        dirty.sort();
        dirty
    }

    /// Bumped on every structural change (append or remove)
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.walk().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.dirty.clear();
        self.revision += 1;
    }
}
