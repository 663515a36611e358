//! Settings file for the terminal game.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// User settings, read from `noughts.toml` when present.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause before the opponent's reply is shown, in milliseconds.
    think_delay_ms: u64,

    /// Seed for the opponent's random tie-breaks. Random when absent.
    seed: Option<u64>,

    /// Where logs go while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            think_delay_ms: 500,
            seed: None,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    ///
    /// A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(
            think_delay_ms = settings.think_delay_ms,
            seed = ?settings.seed,
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Applies command-line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, seed: Option<u64>, delay_ms: Option<u64>) -> Self {
        if let Some(seed) = seed {
            self.seed = Some(seed);
        }
        if let Some(delay_ms) = delay_ms {
            self.think_delay_ms = delay_ms;
        }
        self
    }

    /// The opponent's presentation delay.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(*settings.think_delay_ms(), 500);
        assert_eq!(*settings.seed(), None);
        assert_eq!(settings.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_overrides_win() {
        let settings = Settings::default().with_overrides(Some(9), Some(0));
        assert_eq!(*settings.seed(), Some(9));
        assert_eq!(settings.think_delay(), Duration::ZERO);
    }

    #[test]
    fn test_absent_overrides_keep_values() {
        let settings = Settings::default().with_overrides(None, None);
        assert_eq!(settings, Settings::default());
    }
}
