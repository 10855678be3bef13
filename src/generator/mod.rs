mod error;


pub use error::ScriptError;

use crate::disk::{DEFAULT_DISK_NAME, DEFAULT_IMAGE_NAME, VirtualDisk};
use crate::script::{HarnessCommand, Script};
use crate::vpath::PathTranslator;
use crate::walker::{EntryKind, walk};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds the harness script for a source folder
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    root: PathBuf,
    disk_name: String,
    image_name: String,
}

impl ScriptGenerator {
    /// Create a generator with the default disk and image names
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            disk_name: DEFAULT_DISK_NAME.to_string(),
            image_name: DEFAULT_IMAGE_NAME.to_string(),
        }
    }

    /// Set the image file attached as the virtual disk
    pub fn image(mut self, name: impl Into<String>) -> Self {
        self.image_name = name.into();
        self
    }

    /// Set the virtual disk name
    pub fn disk(mut self, name: impl Into<String>) -> Self {
        self.disk_name = name.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the source folder and produce the full script.
    ///
    /// The walk completes before anything is returned, so a filesystem
    /// error never yields a partial script.
    pub fn generate(&self) -> Result<Script, ScriptError> {
        let disk = VirtualDisk::new(self.disk_name.as_str(), self.image_name.as_str());
        let translator = PathTranslator::new(self.root.as_path(), &disk);
        let entries = walk(&self.root)?;

        let mut script = Script::new(disk.clone());
        script.push(HarnessCommand::UmkaInit);
        script.push(HarnessCommand::DiskAdd {
            image_path: disk.image_path(),
            disk: disk.name().to_string(),
        });

        let mut dir_count = 0;
        let mut file_count = 0;

        for entry in &entries {
            let path = translator.translate(&entry.path)?;
            debug!(
                real = %entry.path.display(),
                virtual_path = %path,
                depth = entry.depth,
                kind = ?entry.kind,
                "entry"
            );

            match entry.kind {
                EntryKind::Dir => {
                    dir_count += 1;
                    script.push(HarnessCommand::Ls80 { path });
                }
                EntryKind::File => {
                    file_count += 1;
                    script.push(HarnessCommand::Read70 { path });
                }
            }
        }

        script.push(HarnessCommand::DiskDel {
            disk: disk.name().to_string(),
        });

        info!(
            root = %self.root.display(),
            disk = disk.name(),
            image = disk.image(),
            dirs = dir_count,
            files = file_count,
            "generated test script"
        );

        Ok(script)
    }
}
