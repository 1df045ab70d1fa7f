//! Configuration file loading for the rating calculator.
//!
//! The calculator reads `rating-calc.toml` from the current directory unless
//! another path is given. A missing default file is not an error; built-in
//! defaults apply.
//!
//! ```toml
//! algorithm = 7
//! as_of = "2025-06-30"
//! default_k_factor = 20
//!
//! [players.anna]
//! rating = 2180
//! rapidRating = 2105
//! birthdate = "2009-03-14"
//! ```

use chess_rating::{RatingAlgorithm, RatingRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Requested player was not found in the configuration.
    #[error("Player not found: {0}")]
    PlayerNotFound(String),
}

/// Calculator configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct CalcConfig {
    /// Rating algorithm code used when a command does not name one.
    #[serde(default)]
    pub algorithm: Option<RatingAlgorithm>,
    /// Date results count on, for the junior K-factor rule.
    /// Written as a quoted `YYYY-MM-DD` string.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
    /// K-factor used by `change` and `tournament` when none is given.
    /// Defaults to 20.
    #[serde(default = "default_k_factor")]
    pub default_k_factor: u32,
    /// Named player records, in the API's field naming.
    #[serde(default)]
    pub players: HashMap<String, RatingRecord>,
}

fn default_k_factor() -> u32 {
    chess_rating::k_factor::DEFAULT_K
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            algorithm: None,
            as_of: None,
            default_k_factor: default_k_factor(),
            players: HashMap::new(),
        }
    }
}

impl CalcConfig {
    /// Loads the calculator configuration.
    ///
    /// An explicit path must exist. Without one, [`Self::config_path()`] is
    /// read if present and defaults are used otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let default_path = Self::config_path();
                if default_path.exists() {
                    Self::load_from(&default_path)
                } else {
                    tracing::debug!("no {} found, using defaults", default_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    /// Reads and parses a configuration file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::info!(
            path = %path.display(),
            players = config.players.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Returns the default configuration path, `rating-calc.toml` in the
    /// current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("rating-calc.toml")
    }

    /// Retrieves a player record by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PlayerNotFound`] if no player with the given name exists.
    pub fn get_player(&self, name: &str) -> Result<&RatingRecord, ConfigError> {
        self.players
            .get(name)
            .ok_or_else(|| ConfigError::PlayerNotFound(name.to_string()))
    }
}
