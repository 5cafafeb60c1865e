//! FIFO frontier and explored set, both keyed by state value.
//!
//! The frontier keeps FIFO order in a `VecDeque` and mirrors its states in a
//! `HashSet` for O(1) membership. The explored set is a `HashSet` plus an
//! insertion-ordered `Vec`; the `Vec` is what leaves the search, so hash
//! iteration order never reaches a serialization boundary.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::node::NodeId;

/// Breadth-first frontier: append at the tail, remove from the head.
///
/// Maintains:
/// - a `VecDeque<(NodeId, S)>` in generation order
/// - a `HashSet<S>` of the states currently queued
#[derive(Debug, Clone)]
pub struct FifoFrontier<S> {
    queue: VecDeque<(NodeId, S)>,
    queued: HashSet<S>,
    high_water: usize,
}

impl<S: Clone + Eq + Hash> FifoFrontier<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            high_water: 0,
        }
    }

    /// Enqueue `node` at the tail.
    ///
    /// Returns `false` (and does not enqueue) if an equal state is already
    /// queued.
    pub fn push(&mut self, node: NodeId, state: S) -> bool {
        if !self.queued.insert(state.clone()) {
            return false;
        }
        self.queue.push_back((node, state));
        self.high_water = self.high_water.max(self.queue.len());
        true
    }

    /// Dequeue the oldest entry.
    pub fn pop(&mut self) -> Option<(NodeId, S)> {
        let (node, state) = self.queue.pop_front()?;
        self.queued.remove(&state);
        Some((node, state))
    }

    /// Whether an equal state is currently queued.
    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.queued.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    /// Node ids still queued, head first.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.queue.iter().map(|(id, _)| *id)
    }
}

impl<S: Clone + Eq + Hash> Default for FifoFrontier<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// States that have been dequeued for expansion, deduplicated by value.
#[derive(Debug, Clone)]
pub struct ExploredSet<S> {
    seen: HashSet<S>,
    order: Vec<S>,
}

impl<S: Clone + Eq + Hash> ExploredSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
            order: Vec::new(),
        }
    }

    /// Mark `state` explored. Returns `false` if it already was.
    pub fn insert(&mut self, state: S) -> bool {
        if !self.seen.insert(state.clone()) {
            return false;
        }
        self.order.push(state);
        true
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.seen.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Explored states in the order they were first explored.
    #[must_use]
    pub fn into_ordered(self) -> Vec<S> {
        self.order
    }
}

impl<S: Clone + Eq + Hash> Default for ExploredSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
