//! Data structures and algorithms of a scan
//!
//! - `branch`: Branch records decoded from `git branch` and their status
//! - `discovery`: Directory classification and working copy roots
//! - `report`: Column layout and colors of the printed summary
//! - `summary`: Per-repository aggregates and the unpushed-changes policy

pub mod branch;
pub mod discovery;
pub mod report;
pub mod summary;
