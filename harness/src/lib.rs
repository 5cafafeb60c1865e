//! Decant Harness: world-level orchestration for the search engine.
//!
//! The harness runs a world through the engine
//! (`search` → `reconstruct_path` → `verify_path` → canonical JSON → hash)
//! and packages the result as a digest-bound report. It also owns the
//! human-facing pieces: configuration loading, console rendering, and trace
//! observers.
//!
//! The harness does NOT implement search logic; it delegates to
//! `decant_search`. Worlds provide domain data only.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod contract;
pub mod render;
pub mod runner;
pub mod trace;
pub mod worlds;
