//! `SPUSBDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// USB bus; attached devices stay in `extra` under the tool's `_items`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsbBus {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_controller: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
