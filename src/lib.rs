//! Git all status
//!
//! Scans a directory tree for git working copies and summarizes, per
//! repository, the branches that have changes not pushed: uncommitted work,
//! commits ahead of or behind their upstream, or no upstream at all.
//!
//! All version-control questions are answered by the `git` executable; this
//! crate only decides which directories to ask about and how to present the
//! answers.
//!
//! - `areas`: The git port and the per-run session
//! - `artifacts`: Classification, branch records, summaries and the report
//! - `commands`: `discover`, `summarize` and `status`
//! - `errors`: Typed failures

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
