use std::path::PathBuf;

/// What the harness does with an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Listed with ls80, then descended into
    Dir,
    /// Read with read70
    File,
}

/// A single directory or file found under the source folder
#[derive(Debug, Clone)]
pub struct WalkEntry {
    /// Real path, starting with the source folder as given
    pub path: PathBuf,
    /// Depth below the source folder (the folder itself is 0)
    pub depth: usize,
    pub kind: EntryKind,
}

impl WalkEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}
