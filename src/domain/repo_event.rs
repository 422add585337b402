//! Repository event envelope and payload shapes.
//!
//! The envelope follows CloudEvents: the event body sits under `data`, the
//! event kind under `type`. Standard and enterprise repositories differ only
//! in the body, so the envelope is generic over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::NodeResource;
use super::de::null_is_default;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RepoEvent<D> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specversion: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_is_default")]
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataschema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datacontenttype: Option<String>,
    pub data: D,
}

/// Event body sent by the community edition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_group_id: Option<String>,
    pub resource: NodeResource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_before: Option<Value>,
    /// Every other key of `data`, kept as-is.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Event body sent by the enterprise edition: the standard body plus the
/// node's permission snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseEventData {
    #[serde(flatten)]
    pub base: EventData,
    #[serde(default, deserialize_with = "null_is_default")]
    pub resource_reader_authorities: Vec<String>,
    #[serde(default, deserialize_with = "null_is_default")]
    pub resource_denied_authorities: Vec<String>,
    #[serde(default, deserialize_with = "null_is_default")]
    pub resource_reader_security_controls: Vec<String>,
}
