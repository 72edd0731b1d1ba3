use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for creating or updating a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DevicePayload {
    /// Device name, e.g. "Router-A".
    pub name: String,
    /// Role the device plays on the network, e.g. "Core".
    pub job: String,
}

impl DevicePayload {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// A device as echoed back by the API after a create or update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    pub job: String,

    /// Identifier assigned by the API on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Creation timestamp, passed through as sent by the API.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Update timestamp, passed through as sent by the API.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Any other fields the API returned.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One page of the device listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevicePage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,

    /// Entries are left untyped; their shape is owned by the API.
    #[serde(default)]
    pub data: Vec<Value>,
}

impl DevicePage {
    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
