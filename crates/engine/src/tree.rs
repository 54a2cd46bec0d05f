//! Search tree - arena of hypothetical game states
//!
//! Nodes live in one `Vec` and refer to each other by [`NodeId`]. A child
//! stores its parent's id and a parent lists its children's ids, so the
//! back-references need no shared ownership and the whole tree is freed by
//! dropping the arena.

use crate::core::GameState;
use crate::types::Action;

/// Index of a node in its [`SearchTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One explored state
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub state: GameState,
    /// Move that produced this node from its parent; `None` for the root
    pub action: Option<Action>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Ply of this node; the root is 0
    pub depth: usize,
}

#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new(root: GameState) -> Self {
        Self {
            nodes: vec![SearchNode {
                state: root,
                action: None,
                parent: None,
                children: Vec::new(),
                depth: 0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn state(&self, id: NodeId) -> &GameState {
        &self.nodes[id.0].state
    }

    /// Number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_child(&mut self, parent: NodeId, action: Action, state: GameState) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes.push(SearchNode {
            state,
            action: Some(action),
            parent: Some(parent),
            children: Vec::new(),
            depth,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Ancestor of `id` whose parent is the root (`id` itself at ply 1).
    ///
    /// Returns `None` for the root.
    pub fn first_ply_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            match self.nodes[current.0].parent {
                None => return None,
                Some(parent) if parent == self.root() => return Some(current),
                Some(parent) => current = parent,
            }
        }
    }
}
