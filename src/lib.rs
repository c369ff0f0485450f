//! # party-assassin
//!
//! A simulator for the assassin deduction party game.
//!
//! A fixed roster of players gathers at a party. One of them is secretly the
//! assassin. Each round the assassin commits a murder somewhere with some
//! weapon, then every other player suspects two players and accuses one of
//! them. Naming the assassin ends the game; if the roster dwindles to two
//! players the assassin wins.
//!
//! ## Design Principles
//!
//! 1. **Reproducible**: All randomness comes from an injected, seedable
//!    `GameRng`. The same seed replays the same game.
//!
//! 2. **Observable, not printing**: Game operations report what happens as
//!    `GameEvent`s to an `EventSink`. Callers collect, log, print or drop them.
//!
//! 3. **Bounded on request**: `GameConfig::max_rounds` turns an unlucky
//!    endless game into an `Unresolved` outcome.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors
//! - `events`: Game events and sinks
//! - `rules`: Outcomes and roster rules
//! - `game`: The game state machine
//! - `sim`: Batch simulation over many seeded games

pub mod core;
pub mod events;
pub mod game;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GameError, GameRng, GameRngState, Player, PlayerId, PlayerMap,
    Vocabulary,
};

pub use crate::events::{EventKind, EventLog, EventSink, GameEvent, LogSink, NullSink};

pub use crate::rules::{GameOutcome, RosterRule};

pub use crate::game::{Game, GameBuilder, Round};

pub use crate::sim::{run_batch, BatchConfig, BatchStats};
