mod entry;

#[cfg(test)]
mod tests;

pub use entry::{EntryKind, WalkEntry};

use crate::generator::ScriptError;
use std::fs;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Walk `root` depth-first, directories before their contents, siblings
/// sorted by file name.
///
/// Symbolic links are followed, so a link to a directory is listed and
/// descended into like the directory itself. A link that loops back to one
/// of its ancestors is an error. A dangling link is reported as a file.
///
/// The root is always the first entry.
pub fn walk(root: &Path) -> Result<Vec<WalkEntry>, ScriptError> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .contents_first(false);

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => match dangling_link(&err) {
                Some(entry) => {
                    warn!(path = %entry.path.display(), "unresolvable symbolic link");
                    entries.push(entry);
                    continue;
                }
                None => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    return Err(ScriptError::Walk { path, source: err });
                }
            },
        };

        let kind = if entry.file_type().is_dir() {
            EntryKind::Dir
        } else {
            EntryKind::File
        };

        if entry.depth() == 0 && kind != EntryKind::Dir {
            return Err(ScriptError::RootNotDirectory(root.to_path_buf()));
        }

        let depth = entry.depth();
        entries.push(WalkEntry {
            path: entry.into_path(),
            depth,
            kind,
        });
    }

    Ok(entries)
}

/// A link that cannot be resolved (missing target, a target below a regular
/// file, or a link pointing at itself) fails metadata lookup while following
/// links. It is not a directory, so it gets read like any file.
fn dangling_link(err: &walkdir::Error) -> Option<WalkEntry> {
    if err.depth() == 0 || err.loop_ancestor().is_some() {
        return None;
    }

    let path = err.path()?;
    let metadata = fs::symlink_metadata(path).ok()?;
    if !metadata.file_type().is_symlink() {
        return None;
    }

    Some(WalkEntry {
        path: path.to_path_buf(),
        depth: err.depth(),
        kind: EntryKind::File,
    })
}
