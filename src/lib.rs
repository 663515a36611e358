//! Noughts - tic-tac-toe in the terminal
//!
//! The game rules and the rule-based opponent live in `noughts_core`;
//! this crate adds the pieces around them.
//!
//! # Architecture
//!
//! - **Config**: settings file plus command-line overrides
//! - **CLI**: `play` opens the terminal UI, `suggest` prints one opponent move
//! - **TUI**: ratatui board with mouse and keyboard input
//!
//! # Example
//!
//! ```no_run
//! use noughts::{Settings, run_tui};
//!
//! # fn example() -> anyhow::Result<()> {
//! let settings = Settings::load("noughts.toml")?.with_overrides(Some(42), None);
//! run_tui(&settings)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod suggest;
mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use config::{ConfigError, Settings};

// Crate-level exports - One-shot suggestion
pub use suggest::suggest;

// Crate-level exports - Terminal UI
pub use tui::{App, run_tui};
