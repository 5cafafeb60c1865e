//! `SearchGraph`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of [`ExpandEvent`]
//! entries: which node was dequeued, and what happened to each candidate
//! action generated from it. Node summaries are derived from the
//! [`NodeArena`] at serialization time.

use decant_kernel::proof::canon::{canonical_json_bytes, CanonError, ToCanonicalJson};

use crate::node::{NodeArena, NodeId};
use crate::policy::SearchPolicy;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraph {
    /// Ordered expansion events (empty when the policy disables recording).
    pub expansions: Vec<ExpandEvent>,
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + candidate-expansion event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Total order of frontier pops.
    pub expansion_order: u64,
    pub node_id: NodeId,
    pub depth: u32,
    /// One record per generated action, in enumeration order.
    pub candidates: Vec<CandidateRecord>,
    /// Frontier size once this expansion finished.
    pub frontier_len_after: u64,
}

/// A candidate action with its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Index in the model's enumeration order.
    pub index: u64,
    pub outcome: CandidateOutcome,
}

/// Outcome of processing a candidate during expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// New state; child node appended to the frontier.
    Enqueued { to_node: NodeId },
    /// New state satisfying the goal; search stops.
    GoalReached { to_node: NodeId },
    /// An equal state is already waiting in the frontier.
    DuplicateInFrontier,
    /// An equal state has already been expanded.
    DuplicateExplored,
    /// Child would exceed `max_depth`.
    SkippedByDepthLimit,
}

impl CandidateOutcome {
    #[must_use]
    pub fn is_duplicate(self) -> bool {
        matches!(self, Self::DuplicateInFrontier | Self::DuplicateExplored)
    }
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was generated (or the root satisfied the goal).
    GoalReached { node_id: NodeId },
    /// The frontier emptied without finding a goal: no solution exists.
    FrontierExhausted,
    /// The frontier emptied, but some children were cut by `max_depth`.
    DepthLimitReached,
    /// `max_expansions` was hit before the frontier emptied.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable tag used in canonical JSON and log events.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthLimitReached => "depth_limit_reached",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Self::GoalReached { node_id } => serde_json::json!({
                "node_id": node_id.as_u64(),
                "type": self.as_str(),
            }),
            _ => serde_json::json!({ "type": self.as_str() }),
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate counters and policy echo.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_depth_skips: u64,
    pub nodes_created: u64,
    pub explored_count: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReason,
    pub policy: SearchPolicy,
}

impl SearchGraph {
    /// Serialize the graph, with node summaries drawn from `nodes`, to
    /// canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if a state or action renders a non-integer
    /// number.
    pub fn to_canonical_json_bytes<S, A>(&self, nodes: &NodeArena<S, A>) -> Result<Vec<u8>, CanonError>
    where
        S: ToCanonicalJson,
        A: ToCanonicalJson,
    {
        canonical_json_bytes(&self.to_json_value(nodes))
    }

    fn to_json_value<S, A>(&self, nodes: &NodeArena<S, A>) -> serde_json::Value
    where
        S: ToCanonicalJson,
        A: ToCanonicalJson,
    {
        let goal = match self.metadata.termination_reason {
            TerminationReason::GoalReached { node_id } => Some(node_id),
            _ => None,
        };
        let node_summaries: Vec<serde_json::Value> = nodes
            .iter()
            .map(|n| {
                serde_json::json!({
                    "action": n.producing_action.as_ref().map(ToCanonicalJson::to_json_value),
                    "depth": n.depth,
                    "is_goal": goal == Some(n.node_id),
                    "node_id": n.node_id.as_u64(),
                    "parent_id": n.parent_id.map(NodeId::as_u64),
                    "state": n.state.to_json_value(),
                })
            })
            .collect();

        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": node_summaries,
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "frontier_len_after": e.frontier_len_after,
        "node_id": e.node_id.as_u64(),
    })
}

fn candidate_record_to_json(r: &CandidateRecord) -> serde_json::Value {
    let outcome = match r.outcome {
        CandidateOutcome::Enqueued { to_node } => {
            serde_json::json!({ "to_node": to_node.as_u64(), "type": "enqueued" })
        }
        CandidateOutcome::GoalReached { to_node } => {
            serde_json::json!({ "to_node": to_node.as_u64(), "type": "goal_reached" })
        }
        CandidateOutcome::DuplicateInFrontier => serde_json::json!({ "type": "duplicate_in_frontier" }),
        CandidateOutcome::DuplicateExplored => serde_json::json!({ "type": "duplicate_explored" }),
        CandidateOutcome::SkippedByDepthLimit => serde_json::json!({ "type": "skipped_by_depth_limit" }),
    };
    serde_json::json!({ "index": r.index, "outcome": outcome })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "explored_count": m.explored_count,
        "frontier_high_water": m.frontier_high_water,
        "nodes_created": m.nodes_created,
        "policy": m.policy.to_json_value(),
        "termination_reason": m.termination_reason.to_json_value(),
        "total_candidates_generated": m.total_candidates_generated,
        "total_depth_skips": m.total_depth_skips,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
    })
}
