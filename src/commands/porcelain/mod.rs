//! Porcelain commands (user-facing operations)
//!
//! - `status`: Discover every working copy under the scan root and print the
//!   branches with changes not pushed

pub mod status;
