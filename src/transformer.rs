//! Raw payload to `EventRecord` conversion.
//!
//! Enterprise repositories add permission lists to the event body. Only the
//! enterprise body carries `resourceReaderAuthorities`, so its presence in
//! the raw text picks the shape before any decoding happens. The check is a
//! plain substring test: a standard event that mentions the key anywhere
//! (for example inside a property value) is decoded as enterprise, with
//! empty permission lists if it has none. There is no fallback between the
//! two shapes.

use crate::domain::{EnterpriseEventData, EventData, EventRecord, RepoEvent};
use crate::error::EventError;
use tracing::{debug, error};

/// Key that only enterprise event bodies carry.
pub const ENTERPRISE_MARKER: &str = "resourceReaderAuthorities";

#[derive(Debug, Clone, Copy, Default)]
pub struct EventTransformer;

impl EventTransformer {
    pub fn new() -> Self {
        Self
    }

    pub fn transform(&self, raw: &str) -> Result<EventRecord, EventError> {
        debug!("Transforming JSON event: {raw}");

        let decoded = if is_enterprise_payload(raw) {
            decode_enterprise(raw)
        } else {
            decode_standard(raw)
        };

        decoded.inspect_err(|e| {
            error!("An error occurred while transforming the JSON event: {raw} - {e}");
        })
    }
}

pub fn is_enterprise_payload(raw: &str) -> bool {
    raw.contains(ENTERPRISE_MARKER)
}

pub fn decode_standard(raw: &str) -> Result<EventRecord, EventError> {
    let event: RepoEvent<EventData> = serde_json::from_str(raw)?;
    Ok(EventRecord::Standard(event))
}

pub fn decode_enterprise(raw: &str) -> Result<EventRecord, EventError> {
    let event: RepoEvent<EnterpriseEventData> = serde_json::from_str(raw)?;
    Ok(EventRecord::Enterprise(event))
}
