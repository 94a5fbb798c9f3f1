//! Console configuration.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{BoardSize, Engine, EngineError, MAX_PADDING};
use tracing::{debug, info, instrument};

/// Settings for a console session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Board side length N.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Spaces printed on each side of a cell value, at most [`MAX_PADDING`].
    #[serde(default = "default_padding")]
    padding: usize,
}

#[instrument]
fn default_board_size() -> usize {
    BoardSize::default().side()
}

#[instrument]
fn default_padding() -> usize {
    1
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            board_size: default_board_size(),
            padding: default_padding(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or sets a padding
    /// above [`MAX_PADDING`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;

        info!(board_size = config.board_size, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Fails if the resulting padding exceeds [`MAX_PADDING`].
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        padding: Option<usize>,
    ) -> Result<Self, ConfigError> {
        if let Some(board_size) = board_size {
            self.board_size = board_size;
        }
        if let Some(padding) = padding {
            self.padding = padding;
        }
        self.validate()?;
        Ok(self)
    }

    /// Builds the engine for the configured board size.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn engine(&self) -> Result<Engine, ConfigError> {
        Engine::new(self.board_size).map_err(|e| ConfigError::with_source(e.to_string(), e))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.padding > MAX_PADDING {
            return Err(ConfigError::new(format!(
                "Padding {} exceeds the maximum of {}",
                self.padding, MAX_PADDING
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
    /// Engine error behind this one, if any.
    pub source: Option<EngineError>,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
            source: None,
        }
    }

    /// Creates a configuration error caused by an engine error.
    #[track_caller]
    pub fn with_source(message: String, source: EngineError) -> Self {
        Self {
            source: Some(source),
            ..Self::new(message)
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
