//! Game configuration.
//!
//! Two inputs configure a game:
//! - `Vocabulary`: the places and weapons, usually loaded from a JSON file
//! - `GameConfig`: player count, round limit and roster rule

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::rules::RosterRule;

/// Player count used when none is configured.
pub const DEFAULT_PLAYER_COUNT: usize = 5;

/// The places and weapons a game draws from.
///
/// Loaded from JSON of the form:
///
/// ```json
/// { "places": ["Kitchen", "Library"], "weapons": ["Knife", "Rope"] }
/// ```
///
/// Both lists must be present and non-empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub places: Vec<String>,
    pub weapons: Vec<String>,
}

/// Raw file contents before validation. Missing lists deserialize to `None`
/// so they can be reported by name.
#[derive(Deserialize)]
struct RawVocabulary {
    places: Option<Vec<String>>,
    weapons: Option<Vec<String>>,
}

impl Vocabulary {
    /// Create a vocabulary from any string-like lists.
    ///
    /// No validation happens here; `Game::new` rejects empty lists.
    pub fn new<P, W>(places: P, weapons: W) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            places: places.into_iter().map(Into::into).collect(),
            weapons: weapons.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse and validate a JSON vocabulary.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawVocabulary = serde_json::from_str(json)?;

        let places = raw.places.ok_or(ConfigError::MissingField("places"))?;
        if places.is_empty() {
            return Err(ConfigError::EmptyField("places"));
        }
        let weapons = raw.weapons.ok_or(ConfigError::MissingField("weapons"))?;
        if weapons.is_empty() {
            return Err(ConfigError::EmptyField("weapons"));
        }

        Ok(Self { places, weapons })
    }

    /// Load and validate a JSON vocabulary file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound { path: path.to_path_buf() }
            } else {
                ConfigError::Io { path: path.to_path_buf(), source }
            }
        })?;

        let vocabulary = Self::from_json_str(&json)?;
        log::info!(
            "loaded {} places and {} weapons from {}",
            vocabulary.places.len(),
            vocabulary.weapons.len(),
            path.display()
        );
        Ok(vocabulary)
    }
}

/// Game rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Rounds `Game::play` runs before giving up. `None` plays until the
    /// game resolves.
    pub max_rounds: Option<u32>,

    /// Whether wrongly accused players leave the roster.
    pub roster_rule: RosterRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            max_rounds: None,
            roster_rule: RosterRule::Static,
        }
    }
}

impl GameConfig {
    /// Create a config for `player_count` players with default rules.
    ///
    /// The count is validated when the game is built.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Set the roster rule.
    #[must_use]
    pub fn with_roster_rule(mut self, rule: RosterRule) -> Self {
        self.roster_rule = rule;
        self
    }
}
