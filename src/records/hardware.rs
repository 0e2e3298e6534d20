//! `SPHardwareDataType` overview.
//!
//! The tool reports a single property bag for the machine, so this category
//! uses the object envelope; the typed view below sits alongside the raw
//! field map held by [`crate::ObjectData`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardwareOverview {
    #[serde(rename = "_name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation_lock_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boot_rom_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_processors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_loader_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_memory: Option<String>,
    #[serde(rename = "platform_UUID", skip_serializing_if = "Option::is_none")]
    pub platform_uuid: Option<String>,
    #[serde(rename = "provisioning_UDID", skip_serializing_if = "Option::is_none")]
    pub provisioning_udid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
