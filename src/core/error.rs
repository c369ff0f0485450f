//! Error types for game setup, play and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Which vocabulary a setup error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VocabularyKind {
    Places,
    Weapons,
}

impl std::fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VocabularyKind::Places => write!(f, "places"),
            VocabularyKind::Weapons => write!(f, "weapons"),
        }
    }
}

/// Errors raised while setting up or playing a game.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid game setup: at least 2 players are required, got {count}")]
    NotEnoughPlayers { count: usize },

    #[error("Invalid game setup: at most 255 players are supported, got {count}")]
    TooManyPlayers { count: usize },

    #[error("Invalid game setup: the list of {kind} is empty")]
    EmptyVocabulary { kind: VocabularyKind },

    #[error("Cannot pick {requested} players out of {available} candidates")]
    NotEnoughCandidates { requested: usize, available: usize },

    #[error("The game is already over")]
    GameOver,
}

/// Errors raised while loading the places/weapons configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding JSON from the configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Configuration must include a '{0}' list")]
    MissingField(&'static str),

    #[error("Configuration '{0}' list must not be empty")]
    EmptyField(&'static str),
}
