use derive_new::new;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Top directory of a non-bare working copy found during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, new)]
pub struct RepositoryRoot(PathBuf);

impl RepositoryRoot {
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Header label: the path relative to `scan_root` with a trailing
    /// separator, `./` for the scan root itself.
    pub fn display_relative_to(&self, scan_root: &Path) -> String {
        let relative = match self.0.strip_prefix(scan_root) {
            Ok(rel) if rel.as_os_str().is_empty() => Path::new("."),
            Ok(rel) => rel,
            Err(_) => self.0.as_path(),
        };

        format!("{}{}", relative.display(), MAIN_SEPARATOR)
    }
}

impl AsRef<Path> for RepositoryRoot {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}
