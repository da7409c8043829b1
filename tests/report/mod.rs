mod report_committed_branch_without_remote;
mod report_commits_not_pushed;
mod report_uncommitted_changes;
