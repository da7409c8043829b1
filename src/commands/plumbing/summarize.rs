use crate::areas::session::Session;
use crate::artifacts::branch::branch::Branch;
use crate::artifacts::branch::branch_record::BranchRecord;
use crate::artifacts::discovery::repository_root::RepositoryRoot;
use crate::artifacts::summary::repository_summary::RepositorySummary;
use std::collections::BTreeSet;

impl Session {
    /// Collects the branch status of one working copy.
    ///
    /// Any failing git invocation aborts the summary: a partial branch list
    /// would misreport what is safe to delete.
    pub fn summarize(
        &self,
        root: &RepositoryRoot,
        fetch_upstream: bool,
    ) -> anyhow::Result<RepositorySummary> {
        let path = root.path();

        if fetch_upstream {
            let remotes = self
                .git()
                .upstream_remotes(path)?
                .into_iter()
                .collect::<BTreeSet<_>>();

            for remote in remotes {
                tracing::info!(repository = %path.display(), %remote, "fetching upstream");
                self.git().fetch(path, &remote)?;
            }
        }

        let dirty = self.git().is_dirty(path)?;
        let records = BranchRecord::decode_listing(&self.git().branch_listing(path)?)?;

        // a repository without commits lists no branches, HEAD still names one
        let branches = if records.is_empty() {
            vec![Branch::unborn(self.git().head_symbolic_ref(path)?, dirty)]
        } else {
            records
                .into_iter()
                .map(|record| Branch::from_record(record, dirty))
                .collect()
        };

        tracing::debug!(repository = %path.display(), branches = branches.len(), dirty, "summarized");

        Ok(RepositorySummary::new(root.clone(), branches))
    }
}
