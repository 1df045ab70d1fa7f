//! Loading tournament and game files.
//!
//! Match lists may be JSON (an array of matches) or TOML (`[[matches]]`
//! tables), chosen by file extension. Game lists are JSON arrays.

use chess_rating::{GameRecord, MatchResult};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when reading an input file.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse JSON input: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse TOML input: {0}")]
    TomlError(#[from] toml::de::Error),
}

#[derive(Deserialize)]
struct MatchFile {
    #[serde(default)]
    matches: Vec<MatchResult>,
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

/// Reads a player's tournament matches.
pub fn load_matches(path: &Path) -> Result<Vec<MatchResult>, InputError> {
    let content = std::fs::read_to_string(path)?;
    let matches = if is_toml(path) {
        toml::from_str::<MatchFile>(&content)?.matches
    } else {
        serde_json::from_str(&content)?
    };
    tracing::info!(path = %path.display(), count = matches.len(), "loaded matches");
    Ok(matches)
}

/// Reads a list of pairings with their result codes.
pub fn load_games(path: &Path) -> Result<Vec<GameRecord>, InputError> {
    let content = std::fs::read_to_string(path)?;
    let games: Vec<GameRecord> = serde_json::from_str(&content)?;
    tracing::info!(path = %path.display(), count = games.len(), "loaded games");
    Ok(games)
}
