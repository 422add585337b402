use super::EventFilter;
use crate::domain::{EventRecord, EventType};

/// Passes events whose envelope `type` equals the given type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTypeFilter {
    expected: EventType,
}

impl EventTypeFilter {
    pub fn of(expected: EventType) -> Self {
        Self { expected }
    }
}

impl EventFilter for EventTypeFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        event.event_type() == self.expected.as_str()
    }
}
