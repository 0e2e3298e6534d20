//! `SPNetworkDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Configured network service (Wi-Fi, Ethernet, VPN, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkService {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "Ethernet", skip_serializing_if = "Option::is_none")]
    pub ethernet: Option<EthernetInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(rename = "IPv4", skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<IpConfig>,
    #[serde(rename = "IPv6", skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<IpConfig>,
    #[serde(rename = "Proxies", skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Proxies>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spnetwork_service_order: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EthernetInfo {
    #[serde(rename = "MAC Address", skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(rename = "MediaOptions", skip_serializing_if = "Vec::is_empty")]
    pub media_options: Vec<String>,
    #[serde(rename = "MediaSubType", skip_serializing_if = "Option::is_none")]
    pub media_sub_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpConfig {
    #[serde(rename = "ConfigMethod", skip_serializing_if = "Option::is_none")]
    pub config_method: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Proxies {
    #[serde(rename = "ExceptionsList", skip_serializing_if = "Vec::is_empty")]
    pub exceptions_list: Vec<String>,
    #[serde(rename = "FTPPassive", skip_serializing_if = "Option::is_none")]
    pub ftp_passive: Option<String>,
}
