use crate::areas::session::Session;
use crate::artifacts::discovery::directory_kind::DirectoryKind;
use crate::artifacts::discovery::repository_root::RepositoryRoot;
use crate::errors::GasError;
use anyhow::Context;
use walkdir::WalkDir;

impl Session {
    /// Walks the scan root depth-first, in file name order, and returns the
    /// top directory of every non-bare working copy.
    ///
    /// Working copies and bare repositories are never entered, so nothing
    /// inside them is reported. Unreadable subdirectories are skipped with a
    /// warning; failing to read the scan root itself is an error.
    pub fn discover(&self) -> anyhow::Result<Vec<RepositoryRoot>> {
        let mut roots = Vec::new();
        let mut walker = WalkDir::new(self.root())
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(GasError::Walk {
                        path: self.root().to_path_buf(),
                        source: err,
                    }
                    .into());
                }
                Err(err) => {
                    tracing::warn!("skipping {err}");
                    continue;
                }
            };

            if !entry.file_type().is_dir() {
                continue;
            }

            let kind = DirectoryKind::classify(entry.path(), self.git())
                .with_context(|| format!("failed to classify {}", entry.path().display()))?;
            tracing::debug!(path = %entry.path().display(), ?kind, "classified directory");

            if kind.is_reported() {
                roots.push(RepositoryRoot::new(entry.path().to_path_buf()));
            }

            if kind.prunes_children() {
                walker.skip_current_dir();
            }
        }

        Ok(roots)
    }
}
