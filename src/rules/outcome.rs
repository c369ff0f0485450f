//! How a game ended.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// `caught_by` named the assassin in round `round`.
    AssassinCaught {
        assassin: PlayerId,
        caught_by: PlayerId,
        round: u32,
    },
    /// The roster shrank too far for the assassin to be caught.
    AssassinWins { assassin: PlayerId, round: u32 },
    /// The round limit ran out.
    Unresolved { rounds: u32 },
}

impl GameOutcome {
    /// Check whether the innocent players won.
    #[must_use]
    pub fn assassin_caught(&self) -> bool {
        matches!(self, GameOutcome::AssassinCaught { .. })
    }

    /// Check whether the game reached a winner.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !matches!(self, GameOutcome::Unresolved { .. })
    }

    /// Rounds played before the game ended.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        match *self {
            GameOutcome::AssassinCaught { round, .. } => round,
            GameOutcome::AssassinWins { round, .. } => round,
            GameOutcome::Unresolved { rounds } => rounds,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::AssassinCaught { assassin, caught_by, round } => write!(
                f,
                "{} caught the assassin ({}) in round {}",
                caught_by, assassin, round
            ),
            GameOutcome::AssassinWins { assassin, round } => {
                write!(f, "the assassin ({}) won in round {}", assassin, round)
            }
            GameOutcome::Unresolved { rounds } => write!(f, "no resolution after {} rounds", rounds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_queries() {
        let caught = GameOutcome::AssassinCaught {
            assassin: PlayerId::new(2),
            caught_by: PlayerId::new(0),
            round: 4,
        };
        assert!(caught.assassin_caught());
        assert!(caught.is_resolved());
        assert_eq!(caught.rounds(), 4);

        let wins = GameOutcome::AssassinWins { assassin: PlayerId::new(1), round: 1 };
        assert!(!wins.assassin_caught());
        assert!(wins.is_resolved());

        let unresolved = GameOutcome::Unresolved { rounds: 100 };
        assert!(!unresolved.is_resolved());
        assert_eq!(unresolved.rounds(), 100);
        assert_eq!(unresolved.to_string(), "no resolution after 100 rounds");
    }
}
