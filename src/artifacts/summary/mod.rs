pub mod repository_summary;
pub mod unpushed_policy;
