//! Search progress observation.

use crate::graph::TerminationReason;
use crate::node::{NodeArena, NodeId};

/// Hook for watching a search as it runs.
///
/// Observers receive shared references only and cannot influence frontier
/// order or membership. Both methods default to doing nothing.
pub trait SearchObserver<S, A> {
    /// Called once per expansion, after all candidates were processed.
    ///
    /// `accepted` lists the children that passed deduplication, in
    /// enumeration order, including a goal child if one was generated.
    fn on_expand(&mut self, nodes: &NodeArena<S, A>, expanded: NodeId, accepted: &[NodeId]) {
        let _ = (nodes, expanded, accepted);
    }

    /// Called exactly once when the search stops.
    fn on_terminate(&mut self, reason: &TerminationReason) {
        let _ = reason;
    }
}

/// Default observer: ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S, A> SearchObserver<S, A> for NoopObserver {}
