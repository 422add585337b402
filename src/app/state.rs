use crate::adapter::HtmlContentCreatedHandler;
use crate::config::Settings;
use crate::dispatcher::EventDispatcher;
use crate::transformer::EventTransformer;
use std::sync::Arc;

/// Shared application state holding the event dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<EventDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: EventDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Create `AppState` from configuration settings, registering the
    /// content-created handler for the configured mime type.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let dispatcher = EventDispatcher::new(EventTransformer::new()).with_handler(Arc::new(
            HtmlContentCreatedHandler::with_mime_type(settings.content_mime_type.clone()),
        ));
        Self::new(dispatcher)
    }
}
