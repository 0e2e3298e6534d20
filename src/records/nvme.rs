//! `SPNVMeDataType` records.
//!
//! The category's items are controllers; each controller nests its devices
//! under its own `_items`, and each device lists its volumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NvmeController {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_items", skip_serializing_if = "Vec::is_empty")]
    pub devices: Vec<NvmeDevice>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NvmeDevice {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsd_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detachable_drive: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partition_map_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removable_media: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spnvme_trim_support: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<NvmeVolume>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NvmeVolume {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsd_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iocontent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<i64>,
}
