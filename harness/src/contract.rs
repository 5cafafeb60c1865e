//! World harness contract: what a world must provide to be run by the runner.
//!
//! A world supplies its transition model (via the search crate's
//! [`TransitionModel`]), its initial state, and its goal. It does not run the
//! search, serialize artifacts, or compute digests; those are runner concerns.

use decant_search::contract::TransitionModel;

/// The contract a world must implement to be run by the harness runner.
pub trait WorldHarness: TransitionModel {
    /// Unique world identifier (e.g., `"two_jugs"`).
    fn world_id(&self) -> &str;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Goal predicate for this world instance.
    fn is_goal(&self, state: &Self::State) -> bool;
}
