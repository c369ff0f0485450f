//! Roster rules: what happens to a wrongly accused player.

use serde::{Deserialize, Serialize};

/// The assassin wins once the active roster is this small.
pub const ASSASSIN_WIN_ROSTER: usize = 2;

/// What happens to a player who is accused but is not the assassin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RosterRule {
    /// Nothing. The roster never shrinks, so the assassin only wins by
    /// attrition in a two-player game.
    #[default]
    Static,
    /// The accused leaves the game: they stop accusing and can no longer
    /// be suspected. The assassin is never eliminated this way.
    EliminateWrongAccused,
}

impl RosterRule {
    #[must_use]
    pub fn eliminates_wrong_accused(self) -> bool {
        matches!(self, RosterRule::EliminateWrongAccused)
    }
}

impl std::fmt::Display for RosterRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterRule::Static => write!(f, "static"),
            RosterRule::EliminateWrongAccused => write!(f, "eliminate"),
        }
    }
}

impl std::str::FromStr for RosterRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "static" => Ok(RosterRule::Static),
            "eliminate" | "eliminate_wrong_accused" => Ok(RosterRule::EliminateWrongAccused),
            other => Err(format!("unknown roster rule '{}' (expected 'static' or 'eliminate')", other)),
        }
    }
}
