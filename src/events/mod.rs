//! Game events and their observers.
//!
//! - `GameEvent`: one variant per observable happening (start, murder,
//!   suspicion, accusation, elimination, outcome)
//! - `EventSink`: the observer trait game operations report to
//! - `EventLog`, `NullSink`, `LogSink`: ready-made sinks

pub mod event;
pub mod sink;

pub use event::{EventKind, GameEvent};
pub use sink::{EventLog, EventSink, LogSink, NullSink};
