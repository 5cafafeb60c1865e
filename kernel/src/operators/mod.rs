//! Operators module: pour actions, their enumeration, and `apply()`.
//!
//! Depends on `carrier`. Does not import from `proof`.

pub mod pour;
