//! Game rules: outcomes and roster handling.
//!
//! - `GameOutcome`: how a finished game ended
//! - `RosterRule`: whether wrongly accused players are eliminated

pub mod outcome;
pub mod roster;

pub use outcome::GameOutcome;
pub use roster::{RosterRule, ASSASSIN_WIN_ROSTER};
