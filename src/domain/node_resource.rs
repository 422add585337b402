use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::de::null_is_default;

/// Repository node carried by an event as `data.resource`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NodeResource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(deserialize_with = "null_is_default")]
    pub name: String,
    #[serde(default)]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "null_is_default")]
    pub is_file: bool,
    #[serde(default, deserialize_with = "null_is_default")]
    pub is_folder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentInfo>,
    // Some producers put the mime type directly on the resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default, deserialize_with = "null_is_default")]
    pub properties: Map<String, Value>,
    #[serde(default, deserialize_with = "null_is_default")]
    pub aspect_names: Vec<String>,
    #[serde(default, deserialize_with = "null_is_default")]
    pub primary_hierarchy: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<UserInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by_user: Option<UserInfo>,
}

impl NodeResource {
    /// Effective mime type: `content.mimeType`, else the flat `mimeType`.
    pub fn mime_type(&self) -> Option<&str> {
        self.content
            .as_ref()
            .and_then(|c| c.mime_type.as_deref())
            .or(self.mime_type.as_deref())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContentInfo {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size_in_bytes: Option<u64>,
    #[serde(default)]
    pub encoding: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
