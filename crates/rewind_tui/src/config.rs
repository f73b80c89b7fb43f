//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file used while the terminal UI owns the screen.
    file: PathBuf,

    /// Filter directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("rewind.log"),
            filter: "info".to_string(),
        }
    }
}

/// Board rendering preferences.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the 1-9 key hint inside empty cells.
    show_cell_numbers: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_cell_numbers: true,
        }
    }
}

/// Top-level front-end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct TuiConfig {
    /// Logging settings.
    logging: LoggingConfig,

    /// Display settings.
    display: DisplayConfig,
}

impl TuiConfig {
    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            log_file = %config.logging.file.display(),
            show_cell_numbers = config.display.show_cell_numbers,
            "Config loaded"
        );
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
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
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = TuiConfig::from_toml_str("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert_eq!(config.logging().file(), &PathBuf::from("rewind.log"));
        assert_eq!(config.logging().filter(), "info");
        assert!(*config.display().show_cell_numbers());
    }

    #[test]
    fn test_partial_toml_overrides_one_key() {
        let config = TuiConfig::from_toml_str("[display]\nshow_cell_numbers = false\n").unwrap();
        assert!(!*config.display().show_cell_numbers());
        assert_eq!(config.logging(), &LoggingConfig::default());
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let err = TuiConfig::from_toml_str("[display\n").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_setters_build_config() {
        let config = TuiConfig::default()
            .with_display(DisplayConfig::default().with_show_cell_numbers(false));
        assert!(!*config.display().show_cell_numbers());
    }
}
