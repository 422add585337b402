use super::EventFilter;
use crate::domain::EventRecord;

/// Passes when the event's node is a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsFileFilter;

impl EventFilter for IsFileFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        event.resource().is_file
    }
}

/// Exact, case-sensitive match on the node's mime type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeTypeFilter {
    expected: String,
}

impl MimeTypeFilter {
    pub fn of(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl EventFilter for MimeTypeFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        event.resource().mime_type() == Some(self.expected.as_str())
    }
}

/// Exact match on the node's content model type, e.g. `cm:content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTypeFilter {
    expected: String,
}

impl NodeTypeFilter {
    pub fn of(expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl EventFilter for NodeTypeFilter {
    fn matches(&self, event: &EventRecord) -> bool {
        event.resource().node_type.as_deref() == Some(self.expected.as_str())
    }
}
