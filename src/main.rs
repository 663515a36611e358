//! Noughts - Unified CLI
//!
//! Play tic-tac-toe against a rule-based opponent, or ask the opponent
//! for a single move.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{Cli, Command, Settings, run_tui, suggest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
        } => run_play(config, seed, delay_ms),
        Command::Suggest { board, seed } => run_suggest(&board, seed),
    }
}

/// Run the terminal game
fn run_play(config: PathBuf, seed: Option<u64>, delay_ms: Option<u64>) -> Result<()> {
    let settings = Settings::load(&config)
        .with_context(|| format!("Loading {}", config.display()))?
        .with_overrides(seed, delay_ms);

    run_tui(&settings)
}

/// Print the opponent's move for a board
fn run_suggest(board_text: &str, seed: Option<u64>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let decision = suggest(board_text, seed)?;
    println!("{}", decision.index());

    Ok(())
}
