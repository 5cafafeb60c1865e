//! Harness runner: drives a world through the search engine and binds the
//! outcome to content digests.
//!
//! The runner uses only engine and kernel APIs. It does not implement any
//! search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate()
//!   → search() → reconstruct_path() → verify_path()
//!   → graph.to_canonical_json_bytes() → canonical_hash(SEARCH_GRAPH)
//!   → report JSON → canonical_json_bytes() → canonical_hash(SEARCH_REPORT)
//! ```

use decant_kernel::proof::canon::{canonical_json_bytes, CanonError, ToCanonicalJson};
use decant_kernel::proof::hash::{
    canonical_hash, ContentHash, DOMAIN_SEARCH_GRAPH, DOMAIN_SEARCH_REPORT,
};
use decant_search::error::SearchError;
use decant_search::observer::SearchObserver;
use decant_search::path::{verify_path, PathVerifyError, SolutionPath};
use decant_search::policy::SearchPolicy;
use decant_search::search::{search, SearchResult};

use crate::contract::WorldHarness;

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Pre-flight policy validation failed.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// The reconstructed path does not replay (engine or world bug).
    #[error("solution path failed replay: {0}")]
    PathVerification(#[from] PathVerifyError),
    /// A state or action did not render to canonical JSON.
    #[error("canonical serialization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Everything a run produced, with its digests.
#[derive(Debug)]
pub struct SearchReport<S, A> {
    pub world_id: String,
    pub result: SearchResult<S, A>,
    /// Replay-verified root-to-goal path, if a goal was reached.
    pub path: Option<SolutionPath<S, A>>,
    pub search_graph_bytes: Vec<u8>,
    pub search_graph_digest: ContentHash,
    pub report_bytes: Vec<u8>,
    pub report_digest: ContentHash,
}

impl<S, A> SearchReport<S, A> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }
}

/// Run `world` under `policy`, reporting progress to `observer`.
///
/// # Errors
///
/// Returns [`RunError::Search`] for an invalid policy,
/// [`RunError::PathVerification`] if the found path does not replay against
/// the world, and [`RunError::Canon`] if serialization fails.
pub fn run_search<W>(
    world: &W,
    policy: &SearchPolicy,
    observer: &mut dyn SearchObserver<W::State, W::Action>,
) -> Result<SearchReport<W::State, W::Action>, RunError>
where
    W: WorldHarness,
    W::State: ToCanonicalJson,
    W::Action: ToCanonicalJson,
{
    let goal = |state: &W::State| world.is_goal(state);
    let initial = world.initial_state();

    // Phase 1: search.
    let result = search(initial.clone(), world, &goal, policy, observer)?;

    // Phase 2: path reconstruction and replay.
    let path = result.path();
    if let Some(path) = &path {
        verify_path(world, path, &goal)?;
    }

    // Phase 3: graph artifact.
    let search_graph_bytes = result.graph.to_canonical_json_bytes(&result.nodes)?;
    let search_graph_digest = canonical_hash(DOMAIN_SEARCH_GRAPH, &search_graph_bytes);

    // Phase 4: report.
    let report_json = serde_json::json!({
        "explored_count": result.explored.len(),
        "initial_state": initial.to_json_value(),
        "path": path.as_ref().map(path_to_json),
        "path_length": path.as_ref().map(SolutionPath::len),
        "search_graph_digest": search_graph_digest.as_str(),
        "termination_reason": result.termination_reason().to_json_value(),
        "total_expansions": result.graph.metadata.total_expansions,
        "world_id": world.world_id(),
    });
    let report_bytes = canonical_json_bytes(&report_json)?;
    let report_digest = canonical_hash(DOMAIN_SEARCH_REPORT, &report_bytes);

    tracing::debug!(
        world_id = world.world_id(),
        termination = %result.termination_reason(),
        path_length = path.as_ref().map(SolutionPath::len),
        report_digest = %report_digest,
        "run complete"
    );

    Ok(SearchReport {
        world_id: world.world_id().to_string(),
        result,
        path,
        search_graph_bytes,
        search_graph_digest,
        report_bytes,
        report_digest,
    })
}

fn path_to_json<S: ToCanonicalJson, A: ToCanonicalJson>(
    path: &SolutionPath<S, A>,
) -> serde_json::Value {
    let steps: Vec<serde_json::Value> = path
        .steps
        .iter()
        .map(|step| {
            serde_json::json!({
                "action": step.action.to_json_value(),
                "state": step.state.to_json_value(),
            })
        })
        .collect();
    serde_json::Value::Array(steps)
}
