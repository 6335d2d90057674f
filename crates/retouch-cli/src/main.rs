//! retouch - adjustment history engine CLI
//!
//! Lists presets, replays edit scripts and exports edited images.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use retouch_core::ExportFormat;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

mod commands;

#[derive(Parser)]
#[command(name = "retouch")]
#[command(author, version, about = "Photo adjustment engine: presets, undo history, export")]
#[command(long_about = "
Drives the retouch adjustment engine from the command line.

Examples:
  retouch presets                               # List filter presets
  retouch presets --json
  retouch replay edits.yaml                     # Replay an edit script
  retouch replay edits.yaml --clamp --json
  retouch export photo.jpg edits.yaml -o out.png
  retouch --config studio.yaml export photo.png edits.yaml -o out.jpg -q 85
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Editor configuration (YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the filter preset catalog
    #[command(visible_alias = "p")]
    Presets(PresetsArgs),

    /// Replay an edit script on an empty session
    #[command(visible_alias = "r")]
    Replay(ReplayArgs),

    /// Load an image, replay an edit script and export the result
    #[command(visible_alias = "e")]
    Export(ExportArgs),
}

#[derive(Args)]
struct PresetsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ReplayArgs {
    /// Edit script (YAML list of ops)
    script: PathBuf,

    /// Clamp `set` values to each channel's slider range
    #[arg(long)]
    clamp: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ExportArgs {
    /// Input image (PNG or JPEG)
    input: PathBuf,

    /// Edit script (YAML list of ops)
    script: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Output format: png, jpeg (default: from extension, then config)
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// JPEG quality 1-100 (default: from config)
    #[arg(short, long)]
    quality: Option<u8>,

    /// Clamp `set` values to each channel's slider range
    #[arg(long)]
    clamp: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Presets(args) => commands::presets::run(args, &config),
        Commands::Replay(args) => commands::replay::run(args, &config),
        Commands::Export(args) => commands::export::run(args, &config),
    }
}
