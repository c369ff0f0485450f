//! Batch runner: many independent seeded games.

use crate::core::{GameConfig, GameError, GameRng, Vocabulary};
use crate::events::GameEvent;
use crate::game::Game;

use super::stats::BatchStats;

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Number of games to play.
    pub games: u32,

    /// Seed of the first game. Game `i` uses `seed_offset + i`.
    pub seed_offset: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            seed_offset: 0,
        }
    }
}

impl BatchConfig {
    /// Create a new batch config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set seed offset.
    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Play `batch.games` games and aggregate their outcomes.
///
/// Every game is built from the same vocabulary and rules with its own
/// seed, so a batch is reproducible.
pub fn run_batch(
    vocabulary: &Vocabulary,
    config: &GameConfig,
    batch: &BatchConfig,
) -> Result<BatchStats, GameError> {
    let mut stats = BatchStats::new();

    for i in 0..batch.games {
        let seed = batch.seed_offset.wrapping_add(u64::from(i));
        let mut game = Game::new(vocabulary.clone(), config.clone(), GameRng::new(seed))?;

        let mut self_accusations = 0u64;
        let mut track = |event: &GameEvent| {
            if let GameEvent::Accusation { player, accused } = event {
                if player == accused {
                    self_accusations += 1;
                }
            }
        };
        let outcome = game.play(&mut track)?;

        log::debug!("game {} (seed {}): {}", i, seed, outcome);
        stats.self_accusations += self_accusations;
        stats.record(&outcome);
    }

    log::info!(
        "batch of {} games: {:.1}% caught, {:.2} rounds on average",
        stats.games,
        stats.catch_rate() * 100.0,
        stats.mean_rounds()
    );
    Ok(stats)
}
