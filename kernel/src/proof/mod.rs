//! Proof module: canonical JSON and content hashing for audit artifacts.
//!
//! Depends on `carrier` and `operators` (for their canonical JSON forms).
//! Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
