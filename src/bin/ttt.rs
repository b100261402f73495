//! Tic-Tac-Toe against a perfect minimax opponent
//!
//! - `play`: interactive game on stdin/stdout
//! - `analyze`: statistics of the full game tree

use anyhow::Result;
use clap::{Parser, Subcommand};
use ttt_minimax::cli::{
    commands::{analyze, play},
    config::CommonConfig,
};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-Tac-Toe against an exhaustive minimax engine", long_about = None)]
struct Cli {
    /// Random seed for reproducible openings
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Hide progress spinners
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play(play::PlayArgs),

    /// Build the full game tree and report its statistics
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let common = CommonConfig {
        seed: cli.seed,
        progress: !cli.no_progress,
        verbose: cli.verbose,
    };
    common.init_tracing();

    match cli.command {
        Commands::Play(args) => play::execute(args, &common),
        Commands::Analyze(args) => analyze::execute(args, &common),
    }
}
