//! Mira Colors CLI - Inspect the color catalog and replay play sessions
//!
//! This CLI provides:
//! - Color and recipe listings
//! - Mixing lookups
//! - The fun-facts explorer
//! - Scripted replays against a seeded store, with snapshot saving
//! - Progress reports from saved snapshots

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mira_colors::cli::{commands, config::DataArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mira")]
#[command(version, about = "Color-mixing game core toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    data: DataArgs,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List colors with recipes and palettes
    Colors(commands::colors::ColorsArgs),

    /// Mix two colors
    Mix(commands::mix::MixArgs),

    /// Browse fun facts
    Facts(commands::facts::FactsArgs),

    /// Replay a scripted session
    Replay(commands::replay::ReplayArgs),

    /// Show progress stored in a snapshot
    Progress(commands::progress::ProgressArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Colors(args) => commands::colors::execute(args, &cli.data),
        Commands::Mix(args) => commands::mix::execute(args, &cli.data),
        Commands::Facts(args) => commands::facts::execute(args, &cli.data),
        Commands::Replay(args) => commands::replay::execute(args, &cli.data),
        Commands::Progress(args) => commands::progress::execute(args, &cli.data),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}
