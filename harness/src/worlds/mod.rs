//! World implementations for the harness runner.

pub mod two_jugs;
