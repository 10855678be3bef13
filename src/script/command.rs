use serde::Serialize;
use std::fmt;

/// Cache size passed to `disk_add -c`
pub const DISK_CACHE_SIZE: u64 = 0;

/// Offset every `read70` starts at
pub const READ_OFFSET: u64 = 0;

/// Bytes requested by every `read70`; larger than any file in the test images
pub const READ_LENGTH: u64 = 16_388_096;

/// Makes `read70` print a hash of the data instead of the data
pub const HASH_FLAG: &str = "-h";

/// One line of a UMKa shell script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HarnessCommand {
    UmkaInit,
    DiskAdd { image_path: String, disk: String },
    /// List a directory; `path` has no trailing slash
    Ls80 { path: String },
    Read70 { path: String },
    DiskDel { disk: String },
}

impl HarnessCommand {
    pub fn verb(&self) -> &'static str {
        match self {
            HarnessCommand::UmkaInit => "umka_init",
            HarnessCommand::DiskAdd { .. } => "disk_add",
            HarnessCommand::Ls80 { .. } => "ls80",
            HarnessCommand::Read70 { .. } => "read70",
            HarnessCommand::DiskDel { .. } => "disk_del",
        }
    }

    /// Positional arguments following the verb
    pub fn args(&self) -> Vec<String> {
        match self {
            HarnessCommand::UmkaInit => Vec::new(),
            HarnessCommand::DiskAdd { image_path, disk } => vec![
                image_path.clone(),
                disk.clone(),
                "-c".to_string(),
                DISK_CACHE_SIZE.to_string(),
            ],
            HarnessCommand::Ls80 { path } => vec![format!("{}/", path)],
            HarnessCommand::Read70 { path } => vec![
                path.clone(),
                READ_OFFSET.to_string(),
                READ_LENGTH.to_string(),
                HASH_FLAG.to_string(),
            ],
            HarnessCommand::DiskDel { disk } => vec![disk.clone()],
        }
    }

    pub(crate) fn record(&self) -> CommandRecord {
        CommandRecord {
            verb: self.verb(),
            args: self.args(),
        }
    }
}

impl fmt::Display for HarnessCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())?;
        for arg in self.args() {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// JSON shape of a single command
#[derive(Debug, Serialize)]
pub(crate) struct CommandRecord {
    pub verb: &'static str,
    pub args: Vec<String>,
}
