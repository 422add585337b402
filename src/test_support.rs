//! Shared test support utilities
//!
//! Payload builders in the shape the repository sends, plus a spy filter and
//! a recording handler for dispatch tests.

use crate::domain::{EventRecord, EventType};
use crate::filter::EventFilter;
use crate::port::EventHandler;
use crate::transformer::{decode_enterprise, decode_standard};
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn node_created(resource: Value, extra: Value) -> Value {
    let mut data = json!({
        "eventGroupId": "b5b1ebfe-45fc-4f86-b71b-421996482881",
        "resource": resource,
    });
    if let (Some(data), Some(extra)) = (data.as_object_mut(), extra.as_object()) {
        data.extend(extra.clone());
    }
    json!({
        "specversion": "1.0",
        "type": "org.alfresco.event.node.Created",
        "id": "368818d9-dddd-4b8b-8eab-e050253d7f61",
        "source": "/08d9b620-48de-4247-8f33-360988d3b19b",
        "time": "2024-06-04T10:31:26.550Z",
        "dataschema": "https://api.alfresco.com/schema/event/repo/v1/nodeCreated",
        "datacontenttype": "application/json",
        "data": data,
    })
}

fn resource(name: &str, mime_type: &str, is_file: bool) -> Value {
    json!({
        "@type": "NodeResource",
        "id": "d71dd823-82c7-477c-8490-04cb0e826e65",
        "name": name,
        "nodeType": "cm:content",
        "isFile": is_file,
        "isFolder": false,
        "content": { "mimeType": mime_type, "sizeInBytes": 0, "encoding": "UTF-8" },
        "createdByUser": { "id": "admin", "displayName": "Administrator" },
        "createdAt": "2024-06-04T10:31:26.423Z",
        "properties": { "cm:title": "Test File" },
        "aspectNames": ["cm:titled", "cm:auditable"],
        "primaryHierarchy": ["5f355d16-f824-4173-bf4b-b1ec37ef5549"]
    })
}

pub fn standard_payload(name: &str, mime_type: &str) -> String {
    node_created(resource(name, mime_type, true), json!({})).to_string()
}

pub fn enterprise_payload(name: &str, mime_type: &str) -> String {
    node_created(
        resource(name, mime_type, true),
        json!({
            "resourceReaderAuthorities": ["GROUP_EVERYONE"],
            "resourceDeniedAuthorities": [],
            "resourceReaderSecurityControls": []
        }),
    )
    .to_string()
}

pub fn standard_record(name: &str, mime_type: &str, is_file: bool) -> EventRecord {
    let raw = node_created(resource(name, mime_type, is_file), json!({})).to_string();
    decode_standard(&raw).unwrap()
}

pub fn enterprise_record(name: &str, mime_type: &str) -> EventRecord {
    decode_enterprise(&enterprise_payload(name, mime_type)).unwrap()
}

/// Filter with a fixed answer that counts how often it was asked.
#[derive(Clone)]
pub struct SpyFilter {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl SpyFilter {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl EventFilter for SpyFilter {
    fn matches(&self, _event: &EventRecord) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Handler that only counts the events it receives.
pub struct RecordingHandler {
    types: Vec<EventType>,
    seen: AtomicUsize,
}

impl RecordingHandler {
    pub fn all_types() -> Self {
        Self::for_types(Vec::new())
    }

    pub fn for_types(types: Vec<EventType>) -> Self {
        Self {
            types,
            seen: AtomicUsize::new(0),
        }
    }

    pub fn seen(&self) -> usize {
        self.seen.load(Ordering::SeqCst)
    }
}

impl EventHandler for RecordingHandler {
    fn handled_event_types(&self) -> &[EventType] {
        &self.types
    }

    fn handle_event(&self, _event: &EventRecord) {
        self.seen.fetch_add(1, Ordering::SeqCst);
    }
}
