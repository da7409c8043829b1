//! Collaborators of a scan
//!
//! - `git`: the port to the external `git` executable and its CLI adapter
//! - `session`: the scan root, the git port and the output sink of one run

#[cfg(test)]
pub(crate) mod fake_git;
pub mod git;
pub mod session;
