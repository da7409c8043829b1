use crate::artifacts::branch::branch::Branch;
use crate::artifacts::discovery::repository_root::RepositoryRoot;
use crate::artifacts::summary::unpushed_policy::UnpushedPolicy;
use derive_new::new;

/// A working copy together with its branches, oldest commit first.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RepositorySummary {
    root: RepositoryRoot,
    branches: Vec<Branch>,
}

impl RepositorySummary {
    pub fn root(&self) -> &RepositoryRoot {
        &self.root
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn has_unpushed_changes(&self, policy: UnpushedPolicy) -> bool {
        self.branches
            .iter()
            .any(|branch| branch.has_unpushed_changes(policy))
    }

    /// Branches worth showing: every branch, or only those with unpushed
    /// changes.
    pub fn visible_branches(
        &self,
        all: bool,
        policy: UnpushedPolicy,
    ) -> impl Iterator<Item = &Branch> {
        self.branches
            .iter()
            .filter(move |branch| all || branch.has_unpushed_changes(policy))
    }
}
