//! Game configuration loaded from TOML.

use crate::cli::Overrides;
use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Mark, MatchSettings, SearchMode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Configuration for a noughts session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Human player's name.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Computer player's name.
    #[serde(default = "default_computer_name")]
    computer_name: String,

    /// Mark played by the human.
    #[serde(default = "default_human_mark")]
    human_mark: Mark,

    /// Computer strategy.
    #[serde(default)]
    search_mode: SearchMode,

    /// Pause before the computer's reply is played, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for reproducible games.
    #[serde(default)]
    seed: Option<u64>,

    /// Log destination for the interactive front end.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_player_name() -> String {
    "Player".to_string()
}

#[instrument]
fn default_computer_name() -> String {
    "Computer".to_string()
}

#[instrument]
fn default_human_mark() -> Mark {
    Mark::X
}

#[instrument]
fn default_computer_delay_ms() -> u64 {
    400
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            computer_name: default_computer_name(),
            human_mark: default_human_mark(),
            search_mode: SearchMode::default(),
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player = %config.player_name, mode = %config.search_mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn apply(mut self, overrides: &Overrides) -> Self {
        if let Some(name) = &overrides.name {
            self.player_name = name.clone();
        }
        if let Some(name) = &overrides.computer_name {
            self.computer_name = name.clone();
        }
        if let Some(mode) = overrides.mode {
            self.search_mode = mode;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(delay) = overrides.delay_ms {
            self.computer_delay_ms = delay;
        }
        self
    }

    /// Engine settings for a match built from this configuration.
    pub fn match_settings(&self, auto_reply: bool) -> MatchSettings {
        MatchSettings {
            human_name: self.player_name.clone(),
            computer_name: self.computer_name.clone(),
            human_mark: self.human_mark,
            search_mode: self.search_mode,
            seed: self.seed,
            auto_reply,
        }
    }

    /// Computer reply delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
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
