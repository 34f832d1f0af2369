use crate::scene::node::NodeId;
use crate::scene::tree::Scene;

/// Handle returned by [`PointerListeners::bind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Binding {
    id: ListenerId,
    node: NodeId,
}

/// Pointer-move listeners keyed by the node they are attached to.
///
/// A node holds at most one listener: binding again returns the existing
/// handle, so re-running an effect cannot stack duplicate handlers.
#[derive(Debug, Default)]
pub struct PointerListeners {
    bindings: Vec<Binding>,
    next_id: u64,
}

impl PointerListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, node: NodeId) -> ListenerId {
        if let Some(existing) = self.bindings.iter().find(|b| b.node == node) {
            log::debug!("pointer listener already bound to {:?}", node);
            return existing.id;
        }
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding { id, node });
        id
    }

    pub fn unbind(&mut self, id: ListenerId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|b| b.id != id);
        self.bindings.len() != before
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Listeners whose node is still in the scene
    pub fn live(&self, scene: &Scene) -> Vec<ListenerId> {
        self.bindings
            .iter()
            .filter(|b| scene.contains(b.node))
            .map(|b| b.id)
            .collect()
    }
}
