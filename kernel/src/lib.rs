//! Decant Kernel: the reference two-jug carrier, its pour operators, and the
//! canonical serialization/hashing used by every audit artifact.
//!
//! # API Surface
//!
//! - [`carrier::jug_state::JugState`] -- immutable `(x, y)` state bounded by [`carrier::jug_state::Capacities`]
//! - [`operators::pour::feasible_actions`] -- enumerate admissible pours from a state
//! - [`operators::pour::apply`] -- apply a pour, producing the successor state
//! - [`proof::canon::canonical_json_bytes`] / [`proof::hash::canonical_hash`] -- digest inputs and outputs
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators` ← `proof`
//!
//! One-way only. `carrier` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod carrier;
pub mod operators;
pub mod proof;
