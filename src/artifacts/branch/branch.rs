use crate::artifacts::branch::branch_record::BranchRecord;
use crate::artifacts::branch::track_state::TrackState;
use crate::artifacts::summary::unpushed_policy::UnpushedPolicy;

/// A local branch of one working copy, as seen at the time of the scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Branch {
    pub is_current: bool,
    pub name: String,
    /// Only ever set on the current branch.
    pub is_dirty: bool,
    pub track_state: TrackState,
    /// Empty when no upstream is configured.
    pub upstream: String,
    pub author_date: String,
    pub subject: String,
}

impl Branch {
    /// Builds a branch from its listing record; the working tree's dirtiness
    /// is attributed to the checked-out branch only.
    pub fn from_record(record: BranchRecord, working_tree_dirty: bool) -> Self {
        Branch {
            is_current: record.is_current,
            is_dirty: record.is_current && working_tree_dirty,
            name: record.name,
            track_state: record.track_state,
            upstream: record.upstream,
            author_date: record.author_date,
            subject: record.subject,
        }
    }

    /// The branch HEAD names in a repository without any commit yet.
    pub fn unborn(name: String, working_tree_dirty: bool) -> Self {
        Branch {
            is_current: true,
            name,
            is_dirty: working_tree_dirty,
            ..Default::default()
        }
    }

    pub fn is_ahead(&self) -> bool {
        self.track_state.is_ahead()
    }

    pub fn is_behind(&self) -> bool {
        self.track_state.is_behind()
    }

    pub fn has_upstream(&self) -> bool {
        !self.upstream.is_empty()
    }

    pub fn has_unpushed_changes(&self, policy: UnpushedPolicy) -> bool {
        self.is_dirty
            || self.is_ahead()
            || (policy.count_behind && self.is_behind())
            || !self.has_upstream()
    }
}
