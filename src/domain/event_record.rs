use serde_json::{Map, Value};

use super::{EnterpriseEventData, EventData, EventType, NodeResource, RepoEvent};

/// A decoded repository event, tagged with the shape it was decoded as.
#[derive(Clone, Debug, PartialEq)]
pub enum EventRecord {
    Standard(RepoEvent<EventData>),
    Enterprise(RepoEvent<EnterpriseEventData>),
}

impl EventRecord {
    pub fn resource(&self) -> &NodeResource {
        &self.data().resource
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.data().attributes
    }

    /// The raw envelope `type` string.
    pub fn event_type(&self) -> &str {
        match self {
            EventRecord::Standard(event) => &event.event_type,
            EventRecord::Enterprise(event) => &event.event_type,
        }
    }

    pub fn known_event_type(&self) -> Option<EventType> {
        EventType::parse(self.event_type())
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            EventRecord::Standard(event) => event.id.as_deref(),
            EventRecord::Enterprise(event) => event.id.as_deref(),
        }
    }

    pub fn is_enterprise(&self) -> bool {
        matches!(self, EventRecord::Enterprise(_))
    }

    fn data(&self) -> &EventData {
        match self {
            EventRecord::Standard(event) => &event.data,
            EventRecord::Enterprise(event) => &event.data.base,
        }
    }
}
