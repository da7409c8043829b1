use crate::areas::session::Session;
use crate::artifacts::report::palette::Palette;
use crate::artifacts::report::report_table::ReportTable;
use crate::artifacts::summary::unpushed_policy::UnpushedPolicy;
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct StatusOptions {
    pub all: bool,
    pub fetch_upstream: bool,
    pub palette: Palette,
    pub policy: UnpushedPolicy,
}

impl Session {
    /// Prints the branch summary of every working copy below the scan root
    /// and tells whether any of them has changes not pushed.
    ///
    /// Nothing is printed unless every repository was summarized.
    pub fn status(&self, opts: &StatusOptions) -> anyhow::Result<bool> {
        let roots = self.discover()?;
        tracing::debug!(count = roots.len(), "discovered working copies");

        let summaries = roots
            .iter()
            .map(|root| self.summarize(root, opts.fetch_upstream))
            .collect::<anyhow::Result<Vec<_>>>()?;
        tracing::debug!(
            branches = summaries.iter().map(|s| s.branches().len()).sum::<usize>(),
            "summarized working copies"
        );

        let table = ReportTable::build(self.root(), &summaries, opts.all, opts.policy);
        if table.is_empty() {
            tracing::debug!("nothing to report");
        } else {
            let mut writer = self.writer();
            table.write_to(&mut **writer, opts.palette)?;
            writer.flush()?;
        }

        Ok(summaries
            .iter()
            .any(|summary| summary.has_unpushed_changes(opts.policy)))
    }
}
