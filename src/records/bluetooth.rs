//! `SPBluetoothDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BluetoothInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_properties: Option<ControllerProperties>,
    /// Each entry maps a device name to its details.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub device_not_connected: Vec<BTreeMap<String, PairedDevice>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_chipset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_discoverable: Option<String>,
    #[serde(rename = "controller_firmwareVersion", skip_serializing_if = "Option::is_none")]
    pub controller_firmware_version: Option<String>,
    #[serde(rename = "controller_productID", skip_serializing_if = "Option::is_none")]
    pub controller_product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_state: Option<String>,
    #[serde(rename = "controller_supportedServices", skip_serializing_if = "Option::is_none")]
    pub controller_supported_services: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_transport: Option<String>,
    #[serde(rename = "controller_vendorID", skip_serializing_if = "Option::is_none")]
    pub controller_vendor_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PairedDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_address: Option<String>,
    #[serde(rename = "device_minorType", skip_serializing_if = "Option::is_none")]
    pub device_minor_type: Option<String>,
}
