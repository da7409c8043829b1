//! In-memory [`GitPort`] for unit tests.
//!
//! Repository markers are created on disk as empty directories so that the
//! filesystem side of classification sees the same tree the fake describes.

use crate::areas::git::{GitDirState, GitPort};
use crate::errors::GasError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct FakeRepository {
    pub dirty: bool,
    pub listing: String,
    pub head: String,
    pub remotes: Vec<String>,
    pub failing_command: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct FakeGit {
    bare: HashSet<PathBuf>,
    metadata: HashSet<PathBuf>,
    repositories: HashMap<PathBuf, FakeRepository>,
    fetched: Rc<RefCell<Vec<(PathBuf, String)>>>,
    inspected: Rc<RefCell<Vec<PathBuf>>>,
}

impl FakeGit {
    pub fn with_bare(mut self, path: &Path) -> Self {
        std::fs::create_dir_all(path).expect("Failed to create bare repository dir");
        self.bare.insert(path.to_path_buf());
        self
    }

    pub fn with_working_copy(self, root: &Path) -> Self {
        self.with_repository(root, FakeRepository::default())
    }

    pub fn with_repository(mut self, root: &Path, repository: FakeRepository) -> Self {
        let dot_git = root.join(".git");
        std::fs::create_dir_all(&dot_git).expect("Failed to create .git dir");
        self.metadata.insert(dot_git);
        self.repositories.insert(root.to_path_buf(), repository);
        self
    }

    /// Every `(root, remote)` pair fetched, in call order. The handle stays
    /// valid after the fake is boxed into a session.
    pub fn fetch_log(&self) -> Rc<RefCell<Vec<(PathBuf, String)>>> {
        self.fetched.clone()
    }

    /// Every directory inspected, in call order.
    pub fn inspection_log(&self) -> Rc<RefCell<Vec<PathBuf>>> {
        self.inspected.clone()
    }

    fn repository(&self, root: &Path, command: &str) -> anyhow::Result<&FakeRepository> {
        let repository = self
            .repositories
            .get(root)
            .ok_or_else(|| anyhow::anyhow!("no fake repository at {}", root.display()))?;

        if repository.failing_command == Some(command) {
            return Err(GasError::GitCommand {
                command: command.to_string(),
                dir: root.to_path_buf(),
                exit_code: Some(128),
                stderr: format!("fatal: {command} failed"),
            }
            .into());
        }

        Ok(repository)
    }
}

impl GitPort for FakeGit {
    fn inspect_git_dir(&self, dir: &Path) -> anyhow::Result<GitDirState> {
        self.inspected.borrow_mut().push(dir.to_path_buf());

        Ok(if self.bare.contains(dir) {
            GitDirState::Bare
        } else if self.metadata.contains(dir) {
            GitDirState::NonBare
        } else {
            GitDirState::NotRepository
        })
    }

    fn is_dirty(&self, root: &Path) -> anyhow::Result<bool> {
        Ok(self.repository(root, "status")?.dirty)
    }

    fn branch_listing(&self, root: &Path) -> anyhow::Result<String> {
        Ok(self.repository(root, "branch")?.listing.clone())
    }

    fn head_symbolic_ref(&self, root: &Path) -> anyhow::Result<String> {
        Ok(self.repository(root, "symbolic-ref")?.head.clone())
    }

    fn upstream_remotes(&self, root: &Path) -> anyhow::Result<Vec<String>> {
        Ok(self.repository(root, "remotes")?.remotes.clone())
    }

    fn fetch(&self, root: &Path, remote: &str) -> anyhow::Result<()> {
        self.repository(root, "fetch")?;
        self.fetched
            .borrow_mut()
            .push((root.to_path_buf(), remote.to_string()));
        Ok(())
    }
}
