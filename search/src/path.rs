//! Solution path reconstruction and replay verification.

use crate::contract::{GoalTest, TransitionModel};
use crate::node::{NodeArena, NodeId};

/// One step of a solution: the action applied and the state it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<S, A> {
    pub action: A,
    pub state: S,
}

/// A root-to-goal path: the bare initial state followed by ordered steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionPath<S, A> {
    pub initial: S,
    pub steps: Vec<PathStep<S, A>>,
}

impl<S, A> SolutionPath<S, A> {
    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the initial state already was the goal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last state on the path (the initial state for an empty path).
    #[must_use]
    pub fn final_state(&self) -> &S {
        self.steps.last().map_or(&self.initial, |step| &step.state)
    }

    /// Every state on the path, initial state first.
    pub fn states(&self) -> impl Iterator<Item = &S> {
        std::iter::once(&self.initial).chain(self.steps.iter().map(|step| &step.state))
    }

    /// The actions in application order.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().map(|step| &step.action)
    }
}

/// Reconstruct the path from the root to `terminal`.
///
/// Walks parent links once (O(depth)), collecting `(action, state)` for every
/// non-root node, then reverses. The arena is only read.
///
/// # Panics
///
/// Panics if `terminal` was not issued by `nodes`.
#[must_use]
pub fn reconstruct_path<S: Clone, A: Clone>(nodes: &NodeArena<S, A>, terminal: NodeId) -> SolutionPath<S, A> {
    let mut steps = Vec::with_capacity(nodes[terminal].depth as usize);
    let mut initial = None;

    for node in nodes.ancestors(terminal) {
        match &node.producing_action {
            Some(action) => steps.push(PathStep {
                action: action.clone(),
                state: node.state.clone(),
            }),
            None => initial = Some(node.state.clone()),
        }
    }

    steps.reverse();
    SolutionPath {
        // The ancestor walk always ends at the root, which has no action.
        initial: initial.unwrap_or_else(|| nodes.root().state.clone()),
        steps,
    }
}

/// Replay failure for a reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathVerifyError {
    /// Applying step `index`'s action to the preceding state did not yield
    /// the recorded state.
    #[error("step {index} does not follow from the preceding state")]
    StepMismatch { index: usize },
    /// The final state does not satisfy the goal.
    #[error("final state does not satisfy the goal")]
    GoalNotSatisfied,
}

/// Re-apply every action of `path` and check the recorded states and goal.
///
/// # Errors
///
/// Returns the first [`PathVerifyError`] found.
pub fn verify_path<M, G>(
    model: &M,
    path: &SolutionPath<M::State, M::Action>,
    goal: &G,
) -> Result<(), PathVerifyError>
where
    M: TransitionModel + ?Sized,
    G: GoalTest<M::State> + ?Sized,
{
    let mut current = &path.initial;
    for (index, step) in path.steps.iter().enumerate() {
        if model.apply(current, &step.action) != step.state {
            return Err(PathVerifyError::StepMismatch { index });
        }
        current = &step.state;
    }
    if !goal.is_goal(current) {
        return Err(PathVerifyError::GoalNotSatisfied);
    }
    Ok(())
}
