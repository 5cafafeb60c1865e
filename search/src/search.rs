//! Search entry points and the breadth-first expansion loop.

use crate::contract::{GoalTest, TransitionModel};
use crate::error::SearchError;
use crate::frontier::{ExploredSet, FifoFrontier};
use crate::graph::{
    CandidateOutcome, CandidateRecord, ExpandEvent, SearchGraph, SearchGraphMetadata,
    TerminationReason,
};
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::observer::{NoopObserver, SearchObserver};
use crate::path::{reconstruct_path, SolutionPath};
use crate::policy::SearchPolicy;

/// Result of a search execution.
///
/// Always carries the node arena and audit graph regardless of how the search
/// terminated. "No solution" is `goal_node == None` with
/// [`TerminationReason::FrontierExhausted`].
#[derive(Debug)]
pub struct SearchResult<S, A> {
    /// The terminal node (if a goal was reached).
    pub goal_node: Option<NodeId>,
    /// All nodes created during search: the root plus every accepted child.
    pub nodes: NodeArena<S, A>,
    /// Expanded states, in expansion order, each exactly once.
    pub explored: Vec<S>,
    pub graph: SearchGraph,
}

impl<S, A> SearchResult<S, A> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal_node.is_some()
    }

    #[must_use]
    pub fn termination_reason(&self) -> TerminationReason {
        self.graph.metadata.termination_reason
    }

    /// The terminal node, if a goal was reached.
    #[must_use]
    pub fn goal(&self) -> Option<&SearchNode<S, A>> {
        self.goal_node.and_then(|id| self.nodes.get(id))
    }
}

impl<S: Clone, A: Clone> SearchResult<S, A> {
    /// The root-to-goal path, if a goal was reached.
    #[must_use]
    pub fn path(&self) -> Option<SolutionPath<S, A>> {
        self.goal_node.map(|id| reconstruct_path(&self.nodes, id))
    }
}

/// Breadth-first search from `initial` under the default policy.
///
/// Returns the full [`SearchResult`]; `result.goal()` is the terminal node,
/// or `None` when no reachable state satisfies `goal`.
pub fn solve<M, G>(initial: M::State, model: &M, goal: &G) -> SearchResult<M::State, M::Action>
where
    M: TransitionModel + ?Sized,
    G: GoalTest<M::State> + ?Sized,
{
    run(initial, model, goal, &SearchPolicy::default(), &mut NoopObserver)
}

/// Breadth-first search with an explicit policy and observer.
///
/// Every runtime termination (goal, exhaustion, budgets) returns
/// `Ok(SearchResult)`; inspect [`SearchResult::termination_reason`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures.
pub fn search<M, G>(
    initial: M::State,
    model: &M,
    goal: &G,
    policy: &SearchPolicy,
    observer: &mut dyn SearchObserver<M::State, M::Action>,
) -> Result<SearchResult<M::State, M::Action>, SearchError>
where
    M: TransitionModel + ?Sized,
    G: GoalTest<M::State> + ?Sized,
{
    policy.validate()?;
    Ok(run(initial, model, goal, policy, observer))
}

/// Running counters folded into the graph metadata.
#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    candidates_generated: u64,
    duplicates_suppressed: u64,
    depth_skips: u64,
}

fn run<M, G>(
    initial: M::State,
    model: &M,
    goal: &G,
    policy: &SearchPolicy,
    observer: &mut dyn SearchObserver<M::State, M::Action>,
) -> SearchResult<M::State, M::Action>
where
    M: TransitionModel + ?Sized,
    G: GoalTest<M::State> + ?Sized,
{
    let mut nodes = NodeArena::with_root(initial);
    let mut frontier = FifoFrontier::new();
    let mut explored = ExploredSet::new();
    let mut expansions: Vec<ExpandEvent> = Vec::new();
    let mut counters = Counters::default();

    let termination_reason = if policy.goal_test_root && goal.is_goal(&nodes.root().state) {
        TerminationReason::GoalReached {
            node_id: NodeId::ROOT,
        }
    } else {
        frontier.push(NodeId::ROOT, nodes.root().state.clone());
        expand_until_done(
            model,
            goal,
            policy,
            observer,
            &mut nodes,
            &mut frontier,
            &mut explored,
            &mut expansions,
            &mut counters,
        )
    };

    observer.on_terminate(&termination_reason);
    tracing::debug!(
        termination = %termination_reason,
        expansions = counters.expansions,
        candidates = counters.candidates_generated,
        duplicates = counters.duplicates_suppressed,
        nodes = nodes.len(),
        explored = explored.len(),
        "search finished"
    );

    let goal_node = match termination_reason {
        TerminationReason::GoalReached { node_id } => Some(node_id),
        _ => None,
    };

    let graph = SearchGraph {
        expansions,
        metadata: SearchGraphMetadata {
            total_expansions: counters.expansions,
            total_candidates_generated: counters.candidates_generated,
            total_duplicates_suppressed: counters.duplicates_suppressed,
            total_depth_skips: counters.depth_skips,
            nodes_created: nodes.len() as u64,
            explored_count: explored.len() as u64,
            frontier_high_water: frontier.high_water() as u64,
            termination_reason,
            policy: policy.clone(),
        },
    };

    SearchResult {
        goal_node,
        nodes,
        explored: explored.into_ordered(),
        graph,
    }
}

/// The main loop: pop, mark explored, generate, dedup, goal-test, enqueue.
#[allow(clippy::too_many_arguments)]
fn expand_until_done<M, G>(
    model: &M,
    goal: &G,
    policy: &SearchPolicy,
    observer: &mut dyn SearchObserver<M::State, M::Action>,
    nodes: &mut NodeArena<M::State, M::Action>,
    frontier: &mut FifoFrontier<M::State>,
    explored: &mut ExploredSet<M::State>,
    expansions: &mut Vec<ExpandEvent>,
    counters: &mut Counters,
) -> TerminationReason
where
    M: TransitionModel + ?Sized,
    G: GoalTest<M::State> + ?Sized,
{
    loop {
        if !frontier.is_empty()
            && policy
                .max_expansions
                .is_some_and(|max| counters.expansions >= max)
        {
            return TerminationReason::ExpansionBudgetExceeded;
        }

        let Some((current_id, current_state)) = frontier.pop() else {
            return if counters.depth_skips > 0 {
                TerminationReason::DepthLimitReached
            } else {
                TerminationReason::FrontierExhausted
            };
        };
        let depth = nodes[current_id].depth;
        explored.insert(current_state.clone());

        let actions = model.feasible_actions(&current_state);
        counters.candidates_generated += actions.len() as u64;

        let mut records = Vec::with_capacity(actions.len());
        let mut accepted = Vec::new();
        let mut found = None;

        for (index, action) in actions.into_iter().enumerate() {
            let outcome = if policy.max_depth.is_some_and(|max| depth >= max) {
                counters.depth_skips += 1;
                CandidateOutcome::SkippedByDepthLimit
            } else {
                let child_state = model.apply(&current_state, &action);
                if frontier.contains(&child_state) {
                    counters.duplicates_suppressed += 1;
                    CandidateOutcome::DuplicateInFrontier
                } else if explored.contains(&child_state) {
                    counters.duplicates_suppressed += 1;
                    CandidateOutcome::DuplicateExplored
                } else {
                    let is_goal = goal.is_goal(&child_state);
                    let child_id = nodes.push_child(current_id, action, child_state.clone());
                    accepted.push(child_id);
                    if is_goal {
                        found = Some(child_id);
                        CandidateOutcome::GoalReached { to_node: child_id }
                    } else {
                        frontier.push(child_id, child_state);
                        CandidateOutcome::Enqueued { to_node: child_id }
                    }
                }
            };

            tracing::trace!(
                node = %current_id,
                candidate = index,
                outcome = ?outcome,
                "candidate processed"
            );
            if policy.record_graph {
                records.push(CandidateRecord {
                    index: index as u64,
                    outcome,
                });
            }
            if found.is_some() {
                break;
            }
        }

        observer.on_expand(nodes, current_id, &accepted);

        if policy.record_graph {
            expansions.push(ExpandEvent {
                expansion_order: counters.expansions,
                node_id: current_id,
                depth,
                candidates: records,
                frontier_len_after: frontier.len() as u64,
            });
        }
        counters.expansions += 1;

        if let Some(node_id) = found {
            return TerminationReason::GoalReached { node_id };
        }
    }
}
