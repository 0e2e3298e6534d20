//! `SPDisplaysDataType` records: graphics processors and the displays
//! attached to each.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsCard {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "spdisplays_mtlgpufamilysupport", skip_serializing_if = "Option::is_none")]
    pub spdisplays_mtl_gpu_family_support: Option<String>,
    #[serde(rename = "spdisplays_ndrvs", skip_serializing_if = "Vec::is_empty")]
    pub displays: Vec<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppci_bus: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppci_cores: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppci_device_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppci_model: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_spdisplays_display-product-id", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(rename = "_spdisplays_display-serial-number", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(rename = "_spdisplays_display-vendor-id", skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<String>,
    #[serde(rename = "_spdisplays_display-week", skip_serializing_if = "Option::is_none")]
    pub manufacture_week: Option<String>,
    #[serde(rename = "_spdisplays_display-year", skip_serializing_if = "Option::is_none")]
    pub manufacture_year: Option<String>,
    #[serde(rename = "_spdisplays_displayID", skip_serializing_if = "Option::is_none")]
    pub display_id: Option<String>,
    #[serde(rename = "_spdisplays_pixels", skip_serializing_if = "Option::is_none")]
    pub pixels: Option<String>,
    #[serde(rename = "_spdisplays_resolution", skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_ambient_brightness: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_connection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_display_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_main: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_mirror: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spdisplays_online: Option<String>,
    #[serde(rename = "spdisplays_pixelresolution", skip_serializing_if = "Option::is_none")]
    pub spdisplays_pixel_resolution: Option<String>,
}
