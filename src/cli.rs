//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a rule-based opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a rule-based opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal (mouse or keyboard)
    Play {
        /// Path to the settings file
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Seed for the opponent's random tie-breaks
        #[arg(long)]
        seed: Option<u64>,

        /// Delay before the opponent replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the opponent's move for a board, e.g. `XX..O....`
    Suggest {
        /// Nine squares, row by row: X, O, and . for empty
        board: String,

        /// Seed for the opponent's random tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },
}
