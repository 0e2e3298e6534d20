//! `SPMemoryDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Memory module (or the unified memory summary on Apple silicon).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryModule {
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimm_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimm_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimm_speed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimm_status: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
