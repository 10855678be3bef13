//! Command-line surface for dirtotest.

use clap::{ArgAction, Parser, ValueEnum};
use dirtotest::{DEFAULT_DISK_NAME, DEFAULT_IMAGE_NAME};
use std::path::PathBuf;

pub const USAGE: &str = "dirtotest <folder_name> [<img_name> [<virtual_disk_name>]]";

#[derive(Parser, Debug)]
#[command(
    name = "dirtotest",
    version,
    about = "Generate a UMKa shell script that lists and reads every entry of a directory tree",
    override_usage = USAGE
)]
pub struct Cli {
    /// Directory tree to mirror from the virtual disk
    #[arg(value_name = "folder_name")]
    pub folder: Option<PathBuf>,

    /// Disk image under ../img/ to attach
    #[arg(value_name = "img_name", default_value = DEFAULT_IMAGE_NAME)]
    pub image: String,

    /// Name the image is attached as
    #[arg(value_name = "virtual_disk_name", default_value = DEFAULT_DISK_NAME)]
    pub disk: String,

    /// Write the script to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One harness command per line
    Text,
    /// Structured command list
    Json,
}

impl Cli {
    /// Log filter used when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
