//! Plumbing commands
//!
//! - `discover`: Walk a directory tree and collect working copy roots
//! - `summarize`: Query git for the branch status of one working copy

pub mod discover;
pub mod summarize;
