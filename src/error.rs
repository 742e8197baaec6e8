use std::path::PathBuf;

use crate::game::COLS;

/// Errors reported by the game engine for misuse of its boundary.
///
/// A full column is not an error: it is an ordinary game outcome, reported
/// through `DropResult` so that integration bugs and legitimate play never
/// look alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("column {0} is out of range (expected < {max})", max = COLS)]
    InvalidColumn(usize),

    #[error("the game is over; no moves accepted until reset")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
