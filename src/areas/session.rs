use crate::areas::git::GitPort;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// One run of the scanner: the directory being scanned, the version-control
/// tool answering questions about it and the sink receiving the report.
pub struct Session {
    root: Box<Path>,
    git: Box<dyn GitPort>,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(root: &Path, git: Box<dyn GitPort>, writer: Box<dyn std::io::Write>) -> Self {
        Session {
            root: root.into(),
            git,
            writer: RefCell::new(writer),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn git(&self) -> &dyn GitPort {
        self.git.as_ref()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
