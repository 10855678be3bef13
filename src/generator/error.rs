use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("Source folder is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("Failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Path {} is outside of source folder {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("Failed to write script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize script: {0}")]
    Json(#[from] serde_json::Error),
}
