//! The assassin party game.
//!
//! One player is secretly the assassin. Each round the assassin commits a
//! murder, then every other player suspects two players and accuses one of
//! them. The game ends when someone names the assassin, or when the roster
//! is down to two players and the assassin wins by attrition.
//!
//! ```
//! use party_assassin::core::Vocabulary;
//! use party_assassin::events::EventLog;
//! use party_assassin::game::GameBuilder;
//!
//! let vocabulary = Vocabulary::new(["Kitchen", "Library"], ["Knife", "Rope"]);
//! let mut game = GameBuilder::new(vocabulary).player_count(4).build(42).unwrap();
//!
//! let mut log = EventLog::new();
//! let outcome = game.play(&mut log).unwrap();
//! assert!(game.is_over());
//! assert!(outcome.rounds() >= 1);
//! ```

mod game;

pub use game::{Game, GameBuilder, Round};
