use crate::scene::node::NodeId;

/// Nodes of the splash overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTree {
    pub overlay: NodeId,
}

/// Nodes of the revealed page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealedTree {
    pub main: NodeId,
}

/// Which visual tree a mounted view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Splash(SplashTree),
    Revealed(RevealedTree),
}

impl ViewState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, ViewState::Revealed(_))
    }
}

/// One-way boolean: starts lowered, can be raised once, never lowered again
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealFlag(bool);

impl RevealFlag {
    pub fn is_set(&self) -> bool {
        self.0
    }

    /// Raise the flag. True only for the call that actually changed it.
    pub fn raise(&mut self) -> bool {
        if self.0 {
            return false;
        }
        self.0 = true;
        true
    }
}
