
use crate::disk::VirtualDisk;
use crate::generator::ScriptError;
use std::path::{Component, Path, PathBuf};

/// Maps real paths under the source folder onto the mounted virtual disk.
pub struct PathTranslator {
    root: PathBuf,
    prefix: String,
}

impl PathTranslator {
    pub fn new(root: impl Into<PathBuf>, disk: &VirtualDisk) -> Self {
        Self {
            root: root.into(),
            prefix: disk.mount_prefix(),
        }
    }

    /// Translate a real path into its virtual-disk path.
    ///
    /// The root is stripped component-wise, so a folder deeper in the tree
    /// that shares the root's name keeps that name:
    /// `demo/demo/a.txt` under root `demo` becomes `/hd0/1/demo/a.txt`.
    ///
    /// The root itself maps to the bare mount prefix (`/hd0/1`).
    pub fn translate(&self, path: &Path) -> Result<String, ScriptError> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| self.outside_root(path))?;

        let mut virtual_path = self.prefix.clone();

        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    let part_str = part
                        .to_str()
                        .ok_or_else(|| ScriptError::NonUtf8Path(path.to_path_buf()))?;
                    virtual_path.push('/');
                    virtual_path.push_str(part_str);
                }
                Component::CurDir => continue,
                // Walked paths are joined below the root, so anything else escapes it
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(self.outside_root(path));
                }
            }
        }

        Ok(virtual_path)
    }

    fn outside_root(&self, path: &Path) -> ScriptError {
        ScriptError::OutsideRoot {
            path: path.to_path_buf(),
            root: self.root.clone(),
        }
    }
}
