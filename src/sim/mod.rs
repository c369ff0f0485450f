//! Batch simulation.
//!
//! Plays many seeded games with the same rules and aggregates the outcomes,
//! e.g. to check how quickly games resolve or how often the assassin wins
//! under a given roster rule.
//!
//! ```rust,ignore
//! use party_assassin::sim::{run_batch, BatchConfig};
//!
//! let batch = BatchConfig::default().with_games(10_000).with_seed_offset(1);
//! let stats = run_batch(&vocabulary, &GameConfig::default(), &batch)?;
//! println!("{}", stats);
//! ```

pub mod batch;
pub mod stats;

pub use batch::{run_batch, BatchConfig};
pub use stats::BatchStats;
