//! `SPFirewallDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Application firewall state.
///
/// `spfirewall_applications` maps bundle identifiers (for example
/// `com.apple.sshd-keygen-wrapper`) to the tool's allow/block token; the set
/// of identifiers differs per host, so it is kept as a map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallSettings {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub spfirewall_applications: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spfirewall_globalstate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spfirewall_loggingenabled: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spfirewall_stealthenabled: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
