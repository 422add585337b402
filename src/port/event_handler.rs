//! EventHandler trait for reacting to repository events.
//!
//! Handlers are registered with the `EventDispatcher` as trait objects, so
//! tests can register recording implementations next to the real ones.

use crate::domain::{EventRecord, EventType};
use crate::filter::{AnyEventFilter, EventFilter};

pub trait EventHandler: Send + Sync {
    /// Event types this handler reacts to. Empty means every type.
    ///
    /// Events that arrive without a `type` skip this check and go straight
    /// to the filter.
    fn handled_event_types(&self) -> &[EventType];

    /// Filter evaluated once per event before `handle_event` is called.
    fn event_filter(&self) -> &dyn EventFilter {
        &AnyEventFilter
    }

    /// Runs only for events that passed both the type check and the filter.
    fn handle_event(&self, event: &EventRecord);

    fn accepts(&self, event: &EventRecord) -> bool {
        let types = self.handled_event_types();
        let type_ok = types.is_empty()
            || event.event_type().is_empty()
            || event
                .known_event_type()
                .is_some_and(|t| types.contains(&t));
        type_ok && self.event_filter().matches(event)
    }
}
