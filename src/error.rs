//! Error types for the engine and its configuration.
//!
//! Every engine error is an ordinary rejected-input condition. Nothing is
//! retried internally and a failed call leaves the engine untouched.

use std::path::PathBuf;

use crate::core::Actor;

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid move on pile {pile}: {reason}")]
    InvalidMove { pile: usize, reason: String },

    #[error("not your turn: {actor} tried to move but it is {turn}'s turn")]
    NotYourTurn { actor: Actor, turn: Actor },

    #[error("game is over")]
    GameOver,

    #[error("no move available: all piles are empty")]
    NoMoveAvailable,
}

impl EngineError {
    pub(crate) fn invalid_move(pile: usize, reason: impl Into<String>) -> Self {
        EngineError::InvalidMove {
            pile,
            reason: reason.into(),
        }
    }
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

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation(msg) => EngineError::InvalidConfig(msg),
            other => EngineError::InvalidConfig(other.to_string()),
        }
    }
}
