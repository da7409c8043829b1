use crate::areas::git::{GitDirState, GitPort};
use std::path::Path;

const DOT_GIT: &str = ".git";

/// How the scanner treats a directory it visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    /// Not a repository; its children are scanned.
    Ordinary,
    /// Top of a non-bare working copy; recorded, children are not scanned.
    WorkingCopy,
    /// Repository storage without a working tree; skipped with everything below.
    Bare,
    /// Holds a `.git` directory that is itself a bare repository. Not a
    /// working copy: the `.git` storage is skipped when reached, siblings are
    /// scanned.
    BareMetadata,
}

impl DirectoryKind {
    /// Classifies `dir`. Anything the tool does not recognise as a repository
    /// is ordinary, including directories holding a `.git` file or a `.git`
    /// directory that is not valid repository metadata.
    pub fn classify(dir: &Path, git: &dyn GitPort) -> anyhow::Result<Self> {
        if git.inspect_git_dir(dir)? == GitDirState::Bare {
            return Ok(DirectoryKind::Bare);
        }

        let dot_git = dir.join(DOT_GIT);
        if !std::fs::metadata(&dot_git).is_ok_and(|meta| meta.is_dir()) {
            return Ok(DirectoryKind::Ordinary);
        }

        Ok(match git.inspect_git_dir(&dot_git)? {
            GitDirState::NonBare => DirectoryKind::WorkingCopy,
            GitDirState::Bare => DirectoryKind::BareMetadata,
            GitDirState::NotRepository => DirectoryKind::Ordinary,
        })
    }

    pub fn is_reported(&self) -> bool {
        matches!(self, DirectoryKind::WorkingCopy)
    }

    /// Whether the walk must not enter the directory's children.
    pub fn prunes_children(&self) -> bool {
        matches!(self, DirectoryKind::WorkingCopy | DirectoryKind::Bare)
    }
}
