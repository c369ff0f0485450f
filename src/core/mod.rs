//! Core types: players, RNG, configuration and errors.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, Vocabulary, DEFAULT_PLAYER_COUNT};
pub use error::{ConfigError, GameError, VocabularyKind};
pub use player::{Player, PlayerId, PlayerMap, MAX_VISITED_PLACES};
pub use rng::{GameRng, GameRngState};
