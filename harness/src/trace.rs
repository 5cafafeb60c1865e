//! Console trace observer.
//!
//! [`ConsoleTrace`] renders one line per expansion with
//! [`render_expansion_line`] and emits it as an `info` event on the
//! `decant::trace` target. Lines are also kept in memory so callers can
//! print them or assert on them.

use std::fmt::Display;

use decant_search::graph::TerminationReason;
use decant_search::node::{NodeArena, NodeId};
use decant_search::observer::SearchObserver;

use crate::render::render_expansion_line;

/// Tracing target for expansion lines.
pub const TRACE_TARGET: &str = "decant::trace";

/// Records the `Current Node:` line of every expansion.
#[derive(Debug, Default, Clone)]
pub struct ConsoleTrace {
    lines: Vec<String>,
    termination: Option<TerminationReason>,
}

impl ConsoleTrace {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expansion lines in expansion order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// How the observed search stopped, once it has.
    #[must_use]
    pub fn termination(&self) -> Option<TerminationReason> {
        self.termination
    }
}

impl<S: Display, A> SearchObserver<S, A> for ConsoleTrace {
    fn on_expand(&mut self, nodes: &NodeArena<S, A>, expanded: NodeId, accepted: &[NodeId]) {
        let line = render_expansion_line(
            &nodes[expanded].state,
            accepted.iter().map(|&id| &nodes[id].state),
        );
        tracing::info!(target: TRACE_TARGET, "{line}");
        self.lines.push(line);
    }

    fn on_terminate(&mut self, reason: &TerminationReason) {
        tracing::info!(target: TRACE_TARGET, termination = %reason, "search stopped");
        self.termination = Some(*reason);
    }
}
