//! `SPSecureElementDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Secure Element and its controller firmware/hardware identifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecureElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctl_fw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctl_hw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctl_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ctl_mw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_fw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_hw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_in_restricted_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_os_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_plt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub se_prod_signed: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
