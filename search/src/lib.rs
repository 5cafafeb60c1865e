//! Decant Search: deterministic breadth-first graph search with an auditable
//! expansion log.
//!
//! The engine is generic over any finite-branching problem described by a
//! [`TransitionModel`](contract::TransitionModel) and a
//! [`GoalTest`](contract::GoalTest). It depends on `decant_kernel` only for
//! canonical JSON and hashing of the search graph.
//!
//! # Crate dependency graph
//!
//! ```text
//! decant_kernel  ←  decant_search  ←  decant_harness
//! (jugs, canon)     (frontier, nodes)   (worlds, runner, rendering)
//! ```
//!
//! # Key types
//!
//! - [`SearchNode`](node::SearchNode): immutable state node with a parent link into a [`NodeArena`](node::NodeArena)
//! - [`FifoFrontier`](frontier::FifoFrontier) / [`ExploredSet`](frontier::ExploredSet): value-keyed bookkeeping
//! - [`SearchPolicy`](policy::SearchPolicy): budgets and root handling
//! - [`SearchGraph`](graph::SearchGraph): expansion-event audit log
//! - [`SearchObserver`](observer::SearchObserver): optional progress hook
//! - [`solve`](search::solve) / [`reconstruct_path`](path::reconstruct_path): entry points

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod observer;
pub mod path;
pub mod policy;
pub mod search;
