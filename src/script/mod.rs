mod command;


pub use command::{DISK_CACHE_SIZE, HASH_FLAG, HarnessCommand, READ_LENGTH, READ_OFFSET};

use crate::disk::VirtualDisk;
use crate::generator::ScriptError;
use command::CommandRecord;
use serde::Serialize;
use std::io::Write;

/// An ordered harness script for one virtual disk
#[derive(Debug, Clone)]
pub struct Script {
    disk: VirtualDisk,
    commands: Vec<HarnessCommand>,
}

/// JSON document written by `Script::write_json`
#[derive(Serialize)]
struct ScriptDocument<'a> {
    disk: &'a str,
    image: &'a str,
    commands: Vec<CommandRecord>,
}

impl Script {
    pub fn new(disk: VirtualDisk) -> Self {
        Self {
            disk,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: HarnessCommand) {
        self.commands.push(command);
    }

    pub fn disk(&self) -> &VirtualDisk {
        &self.disk
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Newline-terminated lines, the form the harness reads
    pub fn write_text<W: Write>(&self, mut writer: W) -> Result<(), ScriptError> {
        for command in &self.commands {
            writeln!(writer, "{}", command)?;
        }
        Ok(())
    }

    /// Pretty-printed JSON with one record per command
    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), ScriptError> {
        let document = ScriptDocument {
            disk: self.disk.name(),
            image: self.disk.image(),
            commands: self.commands.iter().map(HarnessCommand::record).collect(),
        };
        serde_json::to_writer_pretty(&mut writer, &document)?;
        writeln!(writer)?;
        Ok(())
    }
}
