pub mod directory_kind;
pub mod repository_root;
