//! Game event types.
//!
//! Everything observable that happens during a game is reported as a
//! `GameEvent`. Only the kinds of events and their order carry meaning;
//! the `Display` wording is for humans.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// The kind of a [`GameEvent`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    GameStarted,
    Murder,
    Suspicion,
    Accusation,
    Eliminated,
    AssassinCaught,
    AssassinWins,
    Unresolved,
}

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    /// Every player has picked places and weapons.
    GameStarted { players: usize },

    /// The assassin struck. Nobody but the assassin knows who.
    Murder {
        round: u32,
        place: String,
        weapon: String,
    },

    /// A player names two suspects.
    Suspicion {
        player: PlayerId,
        suspects: [PlayerId; 2],
    },

    /// A player accuses one of their suspects.
    Accusation { player: PlayerId, accused: PlayerId },

    /// A wrongly accused player leaves the game.
    Eliminated { player: PlayerId },

    /// `player` correctly accused the assassin.
    AssassinCaught { player: PlayerId, assassin: PlayerId },

    /// Too few players remain to catch the assassin.
    AssassinWins { assassin: PlayerId },

    /// The round limit ran out before anyone won.
    Unresolved { rounds: u32 },
}

impl GameEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::GameStarted { .. } => EventKind::GameStarted,
            GameEvent::Murder { .. } => EventKind::Murder,
            GameEvent::Suspicion { .. } => EventKind::Suspicion,
            GameEvent::Accusation { .. } => EventKind::Accusation,
            GameEvent::Eliminated { .. } => EventKind::Eliminated,
            GameEvent::AssassinCaught { .. } => EventKind::AssassinCaught,
            GameEvent::AssassinWins { .. } => EventKind::AssassinWins,
            GameEvent::Unresolved { .. } => EventKind::Unresolved,
        }
    }

    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind(),
            EventKind::AssassinCaught | EventKind::AssassinWins | EventKind::Unresolved
        )
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::GameStarted { .. } => write!(f, "The game has started."),
            GameEvent::Murder { place, weapon, .. } => {
                write!(f, "A murder happened at {} with a {}.", place, weapon)
            }
            GameEvent::Suspicion { player, suspects } => {
                write!(f, "{} suspects {}, {}", player, suspects[0], suspects[1])
            }
            GameEvent::Accusation { player, accused } => {
                write!(f, "{} accuses {}", player, accused)
            }
            GameEvent::Eliminated { player } => {
                write!(f, "{} was wrongly accused and leaves the game.", player)
            }
            GameEvent::AssassinCaught { player, .. } => {
                write!(f, "{} has correctly accused the assassin. Game over.", player)
            }
            GameEvent::AssassinWins { .. } => write!(f, "The assassin wins."),
            GameEvent::Unresolved { rounds } => {
                write!(f, "Nobody caught the assassin after {} rounds.", rounds)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines() {
        let murder = GameEvent::Murder {
            round: 1,
            place: "Library".to_string(),
            weapon: "Rope".to_string(),
        };
        assert_eq!(murder.to_string(), "A murder happened at Library with a Rope.");

        let suspicion = GameEvent::Suspicion {
            player: PlayerId::new(0),
            suspects: [PlayerId::new(2), PlayerId::new(4)],
        };
        assert_eq!(suspicion.to_string(), "Player 1 suspects Player 3, Player 5");

        let accusation = GameEvent::Accusation {
            player: PlayerId::new(0),
            accused: PlayerId::new(4),
        };
        assert_eq!(accusation.to_string(), "Player 1 accuses Player 5");

        let caught = GameEvent::AssassinCaught {
            player: PlayerId::new(1),
            assassin: PlayerId::new(3),
        };
        assert_eq!(caught.to_string(), "Player 2 has correctly accused the assassin. Game over.");
    }

    #[test]
    fn test_terminal_events() {
        assert!(GameEvent::AssassinWins { assassin: PlayerId::new(0) }.is_terminal());
        assert!(GameEvent::Unresolved { rounds: 10 }.is_terminal());
        assert!(!GameEvent::GameStarted { players: 5 }.is_terminal());
        assert!(!GameEvent::Eliminated { player: PlayerId::new(1) }.is_terminal());
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::Suspicion {
            player: PlayerId::new(0),
            suspects: [PlayerId::new(1), PlayerId::new(2)],
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""kind":"suspicion""#));

        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
        assert_eq!(deserialized.kind(), EventKind::Suspicion);
    }
}
