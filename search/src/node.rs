//! Search nodes and the arena that owns them.
//!
//! Parent links are [`NodeId`] indices into a [`NodeArena`]. A child is always
//! pushed after its parent, so every parent id is strictly smaller than its
//! child's id and the links form a tree by construction.

use std::fmt;
use std::ops::Index;

/// Index of a node in its [`NodeArena`]. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: Self = Self(0);

    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Id as written into the search graph.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// An immutable search node.
///
/// `parent_id` and `producing_action` are both `None` for the root and both
/// `Some` for every other node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, A> {
    pub node_id: NodeId,
    pub parent_id: Option<NodeId>,
    pub state: S,
    /// Tree depth (root = 0); equals the number of actions from the root.
    pub depth: u32,
    pub producing_action: Option<A>,
}

impl<S, A> SearchNode<S, A> {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Append-only owner of every node created during one search.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    /// Create an arena holding only the root node.
    #[must_use]
    pub fn with_root(state: S) -> Self {
        Self {
            nodes: vec![SearchNode {
                node_id: NodeId::ROOT,
                parent_id: None,
                state,
                depth: 0,
                producing_action: None,
            }],
        }
    }

    /// Append a child of `parent` produced by `action`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn push_child(&mut self, parent: NodeId, action: A, state: S) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            node_id,
            parent_id: Some(parent),
            state,
            depth,
            producing_action: Some(action),
        });
        node_id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode<S, A>> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn root(&self) -> &SearchNode<S, A> {
        &self.nodes[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true: an arena always holds its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        self.nodes.iter()
    }

    /// Walk from `id` up to and including the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, S, A> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

impl<S, A> Index<NodeId> for NodeArena<S, A> {
    type Output = SearchNode<S, A>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Iterator over a node and its ancestors, nearest first.
pub struct Ancestors<'a, S, A> {
    arena: &'a NodeArena<S, A>,
    next: Option<NodeId>,
}

impl<'a, S, A> Iterator for Ancestors<'a, S, A> {
    type Item = &'a SearchNode<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.get(self.next?)?;
        self.next = node.parent_id;
        Some(node)
    }
}
