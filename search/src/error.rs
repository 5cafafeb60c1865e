//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal reached, frontier exhausted, budget exhaustion) are expressed via
//! [`crate::graph::TerminationReason`] on a successful result. In particular,
//! "no solution" is never an error.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No
/// [`SearchResult`](crate::search::SearchResult) is produced because no
/// search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The policy cannot drive a meaningful search.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
