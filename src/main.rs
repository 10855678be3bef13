mod cli;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, OutputFormat};
use dirtotest::{Script, ScriptGenerator};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let Some(folder) = cli.folder.as_deref() else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let script = ScriptGenerator::new(folder)
        .image(cli.image.as_str())
        .disk(cli.disk.as_str())
        .generate()
        .with_context(|| format!("Failed to generate test script for {}", folder.display()))?;

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_script(&script, cli.format, &mut writer)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), commands = script.len(), "script written");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_script(&script, cli.format, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout carries the script
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn write_script<W: Write>(script: &Script, format: OutputFormat, writer: W) -> Result<()> {
    match format {
        OutputFormat::Text => script.write_text(writer),
        OutputFormat::Json => script.write_json(writer),
    }
    .context("Failed to write test script")
}
