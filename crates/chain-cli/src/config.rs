//! Configuration file loading.
//!
//! Settings come from `chain.toml` in the current directory, or from a path
//! given on the command line. A missing file means defaults.

use chain_engine::{Difficulty, Level, LevelBook, LevelError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when loading or using configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// A `[levels.<id>]` table does not describe a usable level.
    #[error("Invalid level: {0}")]
    InvalidLevel(#[from] LevelError),
    /// `log_level` is not a tracing level name.
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// A preset defined in the config file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LevelConfig {
    /// Display name. Defaults to the table key.
    #[serde(default)]
    pub name: Option<String>,
    /// Exactly four catalog piece ids.
    pub pieces: Vec<String>,
}

/// Top-level settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChainConfig {
    /// Difficulty for generated boards.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Preset to deal pieces from. Random selection when unset.
    #[serde(default)]
    pub level: Option<String>,
    /// Log verbosity: trace, debug, info, warn, or error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for saved rounds.
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// Extra presets, keyed by level id.
    #[serde(default)]
    pub levels: BTreeMap<String, LevelConfig>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("saves")
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            level: None,
            log_level: default_log_level(),
            save_dir: default_save_dir(),
            levels: BTreeMap::new(),
        }
    }
}

impl ChainConfig {
    /// Loads the configuration from [`Self::config_path()`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads the configuration from `path`, or defaults if it does not exist.
    ///
    /// Config-defined levels are checked against the catalog here so a bad
    /// file is reported before any round starts.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.level_book()?;
        config.tracing_level()?;
        Ok(config)
    }

    /// Returns the default configuration file path.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chain.toml")
    }

    /// Returns the built-in levels plus those defined in the file.
    pub fn level_book(&self) -> Result<LevelBook, ConfigError> {
        let mut book = LevelBook::builtin();
        for (id, level) in &self.levels {
            let name = level.name.clone().unwrap_or_else(|| id.clone());
            let pieces: Vec<&str> = level.pieces.iter().map(String::as_str).collect();
            book.add(Level::new(id.clone(), name, &pieces))?;
        }
        Ok(book)
    }

    /// Parses `log_level`.
    pub fn tracing_level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
