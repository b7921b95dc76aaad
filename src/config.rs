//! Game configuration loaded from an optional TOML file.

use crate::games::tictactoe::{Mark, Numbering};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "TICTACTOE_CONFIG";

/// File looked for in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Presentation settings for a terminal game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Whether players type 0-8 or 1-9.
    #[serde(default)]
    numbering: Numbering,

    /// Text placed between cells when a row is drawn.
    #[serde(default = "default_separator")]
    separator: String,

    /// Mark that moves first. Defaults to X; `"O"` hands the opening move to O instead.
    #[serde(default = "default_first_mark")]
    first_mark: Mark,

    /// Draw the empty board before the first prompt.
    #[serde(default = "default_show_initial_board")]
    show_initial_board: bool,
}

fn default_separator() -> String {
    " | ".to_string()
}

fn default_first_mark() -> Mark {
    Mark::X
}

fn default_show_initial_board() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            numbering: Numbering::default(),
            separator: default_separator(),
            first_mark: default_first_mark(),
            show_initial_board: default_show_initial_board(),
        }
    }
}

impl GameConfig {
    /// Returns a copy using the given numbering.
    pub fn with_numbering(mut self, numbering: Numbering) -> Self {
        self.numbering = numbering;
        self
    }

    /// Returns a copy where `first` moves first.
    pub fn with_first_mark(mut self, first: Mark) -> Self {
        self.first_mark = first;
        self
    }

    /// Returns a copy that does or does not draw the empty board up front.
    pub fn with_initial_board(mut self, show: bool) -> Self {
        self.show_initial_board = show;
        self
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(numbering = ?config.numbering, first_mark = %config.first_mark, "Config loaded successfully");
        Ok(config)
    }

    /// Finds and loads the configuration for this run.
    ///
    /// An explicitly named file must exist. The default file is optional and
    /// defaults apply when it is missing.
    #[instrument(skip(explicit))]
    pub fn discover(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::discover_in(explicit, Path::new("."))
    }

    /// Like [`discover`](Self::discover), looking for the default file in `dir`
    /// instead of the working directory.
    #[instrument(skip(explicit, dir), fields(dir = %dir.display()))]
    pub fn discover_in(explicit: Option<PathBuf>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Prompt shown before each move.
    pub fn prompt(&self) -> String {
        self.numbering.prompt()
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
