//! `SPAirPortDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirPortInfo {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spairport_airport_interfaces: Vec<AirPortInterface>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_software_information: Option<SoftwareInformation>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Wireless interface plus the networks it can currently see.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirPortInterface {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spairport_airport_other_local_wireless_networks: Vec<WirelessNetwork>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WirelessNetwork {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_network_channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_network_phymode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_network_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_security_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoftwareInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_corewlan_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_corewlankit_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_diagnostics_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_extra_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_family_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_profiler_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spairport_utility_version: Option<String>,
}
