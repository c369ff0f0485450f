//! Aggregate statistics over many simulated games.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::rules::GameOutcome;

/// Statistics collected over a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStats {
    /// Games played to completion.
    pub games: u32,

    /// Games where an innocent player named the assassin.
    pub assassin_caught: u32,

    /// Games the assassin won by attrition.
    pub assassin_wins: u32,

    /// Games that hit the round limit.
    pub unresolved: u32,

    /// Rounds played across all games.
    pub total_rounds: u64,

    /// Most rounds any single game took.
    pub longest_game: u32,

    /// Accusations where a player accused themselves.
    pub self_accusations: u64,

    /// Who made the winning accusation, per player.
    pub catches_by_player: FxHashMap<PlayerId, u32>,
}

impl BatchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one finished game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        let rounds = outcome.rounds();
        self.total_rounds += u64::from(rounds);
        self.longest_game = self.longest_game.max(rounds);

        match *outcome {
            GameOutcome::AssassinCaught { caught_by, .. } => {
                self.assassin_caught += 1;
                *self.catches_by_player.entry(caught_by).or_insert(0) += 1;
            }
            GameOutcome::AssassinWins { .. } => self.assassin_wins += 1,
            GameOutcome::Unresolved { .. } => self.unresolved += 1,
        }
    }

    /// Fraction of games where the assassin was caught.
    #[must_use]
    pub fn catch_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.assassin_caught as f64 / self.games as f64
        }
    }

    /// Average rounds per game.
    #[must_use]
    pub fn mean_rounds(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.games as f64
        }
    }

    /// Fold another batch into this one.
    pub fn merge(&mut self, other: &BatchStats) {
        self.games += other.games;
        self.assassin_caught += other.assassin_caught;
        self.assassin_wins += other.assassin_wins;
        self.unresolved += other.unresolved;
        self.total_rounds += other.total_rounds;
        self.longest_game = self.longest_game.max(other.longest_game);
        self.self_accusations += other.self_accusations;
        for (&player, &catches) in &other.catches_by_player {
            *self.catches_by_player.entry(player).or_insert(0) += catches;
        }
    }
}

impl std::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "games played      {}", self.games)?;
        writeln!(f, "assassin caught   {} ({:.1}%)", self.assassin_caught, self.catch_rate() * 100.0)?;
        writeln!(f, "assassin wins     {}", self.assassin_wins)?;
        writeln!(f, "unresolved        {}", self.unresolved)?;
        writeln!(f, "mean rounds       {:.2}", self.mean_rounds())?;
        writeln!(f, "longest game      {}", self.longest_game)?;
        write!(f, "self accusations  {}", self.self_accusations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = BatchStats::new();
        assert_eq!(stats.catch_rate(), 0.0);
        assert_eq!(stats.mean_rounds(), 0.0);
    }

    #[test]
    fn test_record_outcomes() {
        let mut stats = BatchStats::new();
        stats.record(&GameOutcome::AssassinCaught {
            assassin: PlayerId::new(0),
            caught_by: PlayerId::new(2),
            round: 3,
        });
        stats.record(&GameOutcome::AssassinWins { assassin: PlayerId::new(1), round: 1 });
        stats.record(&GameOutcome::Unresolved { rounds: 8 });
        stats.record(&GameOutcome::AssassinCaught {
            assassin: PlayerId::new(1),
            caught_by: PlayerId::new(2),
            round: 4,
        });

        assert_eq!(stats.games, 4);
        assert_eq!(stats.assassin_caught, 2);
        assert_eq!(stats.assassin_wins, 1);
        assert_eq!(stats.unresolved, 1);
        assert_eq!(stats.total_rounds, 16);
        assert_eq!(stats.longest_game, 8);
        assert_eq!(stats.catches_by_player[&PlayerId::new(2)], 2);
        assert!((stats.catch_rate() - 0.5).abs() < 1e-9);
        assert!((stats.mean_rounds() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_merge() {
        let mut a = BatchStats::new();
        a.record(&GameOutcome::AssassinWins { assassin: PlayerId::new(0), round: 2 });
        a.self_accusations = 1;

        let mut b = BatchStats::new();
        b.record(&GameOutcome::AssassinCaught {
            assassin: PlayerId::new(0),
            caught_by: PlayerId::new(1),
            round: 5,
        });
        b.self_accusations = 2;

        a.merge(&b);
        assert_eq!(a.games, 2);
        assert_eq!(a.total_rounds, 7);
        assert_eq!(a.longest_game, 5);
        assert_eq!(a.self_accusations, 3);
        assert_eq!(a.catches_by_player[&PlayerId::new(1)], 1);
    }
}
