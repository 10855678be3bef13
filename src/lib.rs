// Public API exports
pub mod disk;
pub mod generator;
pub mod script;
pub mod vpath;
pub mod walker;

// Re-export main types for convenience
pub use disk::{DEFAULT_DISK_NAME, DEFAULT_IMAGE_NAME, VirtualDisk};
pub use generator::{ScriptError, ScriptGenerator};
pub use script::{HarnessCommand, READ_LENGTH, Script};
pub use vpath::PathTranslator;
pub use walker::{EntryKind, WalkEntry, walk};
