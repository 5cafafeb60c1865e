//! Carrier module: the state value of the reference puzzle.
//!
//! This is the foundational layer. No other kernel module is imported here.

pub mod jug_state;
