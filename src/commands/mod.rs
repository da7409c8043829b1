//! Command implementations
//!
//! - `plumbing`: Building blocks that discover working copies and summarize
//!   one repository at a time
//! - `porcelain`: The user-facing `status` report composed from them

pub mod plumbing;
pub mod porcelain;
