//! Recursive tree operations.

pub mod get;
pub mod merge;
pub mod remove;
pub mod set;
