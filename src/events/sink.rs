//! Event observers.
//!
//! Game operations report what happens through an `EventSink` instead of
//! printing. Callers decide whether events are collected, logged, printed
//! or dropped.

use super::event::{EventKind, GameEvent};

/// Receives game events in the order they happen.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent);
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn emit(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &GameEvent) {}
}

/// Forwards every event to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&mut self, event: &GameEvent) {
        log::info!("{}", event);
    }
}

/// Collects events in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The kind of every event, in order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.iter().map(GameEvent::kind).collect()
    }

    /// Number of events of the given kind.
    #[must_use]
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[must_use]
    pub fn into_events(self) -> Vec<GameEvent> {
        self.events
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_log_collects_in_order() {
        let mut log = EventLog::new();
        log.emit(&GameEvent::GameStarted { players: 3 });
        log.emit(&GameEvent::AssassinWins { assassin: PlayerId::new(1) });

        assert_eq!(log.len(), 2);
        assert_eq!(log.kinds(), vec![EventKind::GameStarted, EventKind::AssassinWins]);
        assert_eq!(log.count(EventKind::AssassinWins), 1);
        assert_eq!(log.last(), Some(&GameEvent::AssassinWins { assassin: PlayerId::new(1) }));

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut lines = Vec::new();
        {
            let mut sink = |event: &GameEvent| lines.push(event.to_string());
            sink.emit(&GameEvent::GameStarted { players: 2 });
        }
        assert_eq!(lines, vec!["The game has started.".to_string()]);
    }

    #[test]
    fn test_null_and_log_sinks_accept_events() {
        let event = GameEvent::Murder {
            round: 1,
            place: "Kitchen".to_string(),
            weapon: "Knife".to_string(),
        };
        NullSink.emit(&event);
        LogSink.emit(&event);
    }

    #[test]
    fn test_dyn_sink() {
        let mut log = EventLog::new();
        {
            let sink: &mut dyn EventSink = &mut log;
            sink.emit(&GameEvent::Unresolved { rounds: 3 });
        }
        assert_eq!(log.into_events(), vec![GameEvent::Unresolved { rounds: 3 }]);
    }
}
