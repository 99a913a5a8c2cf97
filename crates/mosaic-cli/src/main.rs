mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mosaic", about = "Frequency-domain image alignment and stitching tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stitch overlapping images into a panorama
    Stitch(commands::stitch::StitchArgs),
    /// Estimate the translation offset between two images
    Offset(commands::offset::OffsetArgs),
    /// Locate a template inside a larger image
    Locate(commands::locate::LocateArgs),
    /// Print or save a default configuration file
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Stitch(args) => commands::stitch::run(args),
        Commands::Offset(args) => commands::offset::run(args),
        Commands::Locate(args) => commands::locate::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
