//! Search problem contract traits.

use std::hash::Hash;

/// The transition model of a search problem.
///
/// # Contract
///
/// - `feasible_actions` must be deterministic: same state → same actions in
///   the same order. Breadth-first search breaks ties between equally short
///   solutions by this order.
/// - Every returned action must be well formed for the problem. The engine
///   does not re-validate actions; rejecting malformed ones is the model's job.
/// - `apply` must be pure and must not depend on anything but its arguments.
/// - The state space reachable from any initial state must be finite, or the
///   caller must bound the search with a
///   [`SearchPolicy`](crate::policy::SearchPolicy) budget.
pub trait TransitionModel {
    /// A configuration of the world, compared and hashed by value.
    type State: Clone + Eq + Hash;
    /// Data sufficient to derive a successor state.
    type Action: Clone;

    /// Enumerate all actions admissible from `state`.
    fn feasible_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` to `state`, producing the successor state.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}

impl<M: TransitionModel + ?Sized> TransitionModel for &M {
    type State = M::State;
    type Action = M::Action;

    fn feasible_actions(&self, state: &Self::State) -> Vec<Self::Action> {
        (**self).feasible_actions(state)
    }

    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        (**self).apply(state, action)
    }
}

/// Pure predicate identifying acceptable terminal states.
///
/// Implemented for every `Fn(&S) -> bool`, so a closure is the usual way to
/// inject a goal.
pub trait GoalTest<S: ?Sized> {
    fn is_goal(&self, state: &S) -> bool;
}

impl<S: ?Sized, F> GoalTest<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> bool {
        self(state)
    }
}
