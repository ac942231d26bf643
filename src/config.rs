//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colors used by the terminal UI.
    theme: Theme,

    /// Log output settings.
    log: LogConfig,
}

/// Colors used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color of X marks.
    x: Color,
    /// Color of O marks.
    o: Color,
    /// Color of the winning cells and overlay line.
    win: Color,
    /// Color of grid lines and hints.
    grid: Color,
    /// Background of the keyboard cursor.
    cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            win: Color::Green,
            grid: Color::DarkGray,
            cursor: Color::White,
        }
    }
}

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Log file; the TUI owns the terminal so logs never go to stdout.
    file: PathBuf,

    /// `tracing_subscriber::EnvFilter` directive, overridden by `RUST_LOG`.
    filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(default_log_file()),
            filter: default_filter(),
        }
    }
}

#[instrument]
fn default_log_file() -> String {
    "tictactoe.log".to_string()
}

#[instrument]
fn default_filter() -> String {
    "info".to_string()
}

impl Config {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
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
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log().filter(), "info");
        assert_eq!(*config.theme().x(), Color::Blue);
    }

    #[test]
    fn test_partial_theme_keeps_other_defaults() {
        let config = Config::from_toml("[theme]\nx = \"yellow\"\nwin = \"light_magenta\"\n").unwrap();
        assert_eq!(*config.theme().x(), Color::Yellow);
        assert_eq!(*config.theme().win(), Color::LightMagenta);
        assert_eq!(*config.theme().o(), Color::Red);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let err = Config::from_toml("[theme\n").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[log]\nfile = \"game.log\"\nfilter = \"debug\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.log().file(), &PathBuf::from("game.log"));
        assert_eq!(config.log().filter(), "debug");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_file_is_error_when_explicit() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::from_file(dir.path().join("absent.toml")).is_err());
    }
}
