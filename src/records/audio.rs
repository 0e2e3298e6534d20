//! `SPAudioDataType` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One Core Audio device.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioDevice {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_properties", skip_serializing_if = "Option::is_none")]
    pub properties: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_default_audio_input_device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_default_audio_output_device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_default_audio_system_device: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_device_input: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_device_output: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_device_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_device_srate: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_device_transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_input_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coreaudio_output_source: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
