use crate::error::EventError;
use crate::port::EventHandler;
use crate::transformer::EventTransformer;
use std::sync::Arc;
use tracing::debug;

/// Routes raw payloads to the registered handlers.
///
/// Immutable once built, so a single instance is shared across request
/// tasks behind an `Arc`.
#[derive(Default)]
pub struct EventDispatcher {
    transformer: EventTransformer,
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    pub fn new(transformer: EventTransformer) -> Self {
        Self {
            transformer,
            handlers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn EventHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Decode `raw` and run every handler that accepts it, in registration
    /// order. Returns the number of handlers that ran.
    pub fn dispatch(&self, raw: &str) -> Result<usize, EventError> {
        let event = self.transformer.transform(raw)?;

        let mut handled = 0;
        for handler in &self.handlers {
            if handler.accepts(&event) {
                handler.handle_event(&event);
                handled += 1;
            }
        }

        debug!(
            event_type = event.event_type(),
            event_id = event.id().unwrap_or_default(),
            handled,
            "dispatched event"
        );
        Ok(handled)
    }
}
