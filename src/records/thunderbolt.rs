//! `SPThunderboltDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Thunderbolt/USB4 bus and its first receptacle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThunderboltBus {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_uuid_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receptacle_1_tag: Option<ReceptacleTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_string_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_uid_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name_key: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceptacleTag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_speed_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_status_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receptacle_id_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receptacle_status_key: Option<String>,
}
