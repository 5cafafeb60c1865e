//! Search policy types.

use crate::error::SearchError;

/// Search budget and root-handling configuration.
///
/// The default policy is unbounded and reproduces plain breadth-first graph
/// search: the root is never goal-tested, every other state is goal-tested
/// when it is generated, and the search runs until a goal is generated or the
/// frontier is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (`None` = unbounded).
    pub max_expansions: Option<u64>,
    /// Depth cutoff for generated children (`None` = unbounded).
    pub max_depth: Option<u32>,
    /// Goal-test the root before the first expansion.
    pub goal_test_root: bool,
    /// Record per-expansion events in the search graph.
    ///
    /// Metadata counters are always kept; only the event list is skipped.
    pub record_graph: bool,
}

impl SearchPolicy {
    /// Validate that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero,
    /// which would terminate before the root is expanded.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Canonical JSON form, echoed into the search graph metadata.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "goal_test_root": self.goal_test_root,
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
            "record_graph": self.record_graph,
        })
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_depth: None,
            goal_test_root: false,
            record_graph: true,
        }
    }
}
