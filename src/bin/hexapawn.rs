//! Hexapawn CLI - Play against, train and inspect the pattern-pruning engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hexapawn")]
#[command(version, about = "Hexapawn engine that learns by pruning losing moves", long_about = None)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG decides)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine
    Play(hexapawn::cli::commands::play::PlayArgs),

    /// Train the engine against a stock opponent
    Train(hexapawn::cli::commands::train::TrainArgs),

    /// Show a strategy table
    Inspect(hexapawn::cli::commands::inspect::InspectArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => hexapawn::cli::commands::play::execute(args),
        Commands::Train(args) => hexapawn::cli::commands::train::execute(args),
        Commands::Inspect(args) => hexapawn::cli::commands::inspect::execute(args),
    }
}
