//! upload-payload CLI
//!
//! Usage: upload-payload <COMMAND>
//!
//! Commands:
//!   encode  Print the upload payload (or request body) for a file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use upload_payload::config::{self, Config};
use upload_payload::{Compression, FileCommand, PayloadBuilder};

/// Build zipped, base64-encoded file payloads for remote browser sessions
#[derive(Parser, Debug)]
#[command(name = "upload-payload")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the upload payload for a file
    Encode {
        /// File to upload
        path: PathBuf,

        /// Print the JSON request body instead of the bare payload
        #[arg(long)]
        json: bool,

        /// Directory for temporary artifacts
        #[arg(long)]
        tmp_dir: Option<PathBuf>,

        /// Archive compression (deflated, stored)
        #[arg(long)]
        compression: Option<Compression>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Encode {
            path,
            json,
            tmp_dir,
            compression,
        } => cmd_encode(config, &path, json, tmp_dir, compression),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        return Ok(config::load_or_default());
    };

    let (loaded, warnings) = config::load_with_warnings(path)
        .with_context(|| format!("failed to load config {}", path.display()))?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    Ok(config::with_env_overrides(loaded))
}

fn cmd_encode(
    mut config: Config,
    path: &Path,
    json: bool,
    tmp_dir: Option<PathBuf>,
    compression: Option<Compression>,
) -> Result<()> {
    if let Some(dir) = tmp_dir {
        config.temp.dir = Some(dir);
    }
    if let Some(compression) = compression {
        config.archive.compression = compression;
    }

    let builder = PayloadBuilder::from_config(&config);
    let command = FileCommand::with_builder(path, &builder)
        .with_context(|| format!("failed to build upload payload for {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string(&command.body())?);
    } else {
        println!("{}", command.payload());
    }
    Ok(())
}
