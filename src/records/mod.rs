//! Record schemas for the categories whose fields are modeled.
//!
//! These are plain data-transfer types: every field is optional, values are
//! kept as the tool reports them (strings such as `"spairport_status_on"` are
//! not interpreted), and top-level records keep unrecognized keys in a
//! flattened `extra` map so re-rendering does not lose data. Categories
//! without a modeled schema use [`GenericRecord`].

use serde_json::{Map, Value};

pub mod airport;
pub mod applications;
pub mod audio;
pub mod bluetooth;
pub mod displays;
pub mod firewall;
pub mod fonts;
pub mod hardware;
pub mod memory;
pub mod network;
pub mod nvme;
pub mod power;
pub mod secure_element;
pub mod software;
pub mod storage;
pub mod thunderbolt;
pub mod usb;

/// Untyped record: the JSON object exactly as the tool emitted it.
pub type GenericRecord = Map<String, Value>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_fields_survive_a_render_cycle() {
        let raw = json!({
            "_name": "MacBook Pro Speakers",
            "coreaudio_device_srate": 48000,
            "coreaudio_device_transport": "coreaudio_device_type_builtin",
            "coreaudio_new_field": "kept"
        });
        let device: audio::AudioDevice = serde_json::from_value(raw).unwrap();
        assert_eq!(device.name, "MacBook Pro Speakers");
        assert_eq!(device.coreaudio_device_srate, Some(48000));
        assert_eq!(
            device.extra.get("coreaudio_new_field"),
            Some(&json!("kept"))
        );

        let rendered = serde_json::to_value(&device).unwrap();
        let back: audio::AudioDevice = serde_json::from_value(rendered).unwrap();
        assert_eq!(back, device);
    }

    #[test]
    fn unreported_fields_are_not_rendered() {
        let device: audio::AudioDevice = serde_json::from_value(json!({
            "_name": "d1",
            "coreaudio_device_srate": 44100
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&device).unwrap(),
            json!({"_name": "d1", "coreaudio_device_srate": 44100})
        );

        let controller: nvme::NvmeController = serde_json::from_value(json!({
            "_name": "Apple SSD Controller",
            "_items": [{"_name": "APPLE SSD"}]
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&controller).unwrap(),
            json!({"_name": "Apple SSD Controller", "_items": [{"_name": "APPLE SSD"}]})
        );

        let settings = firewall::FirewallSettings::default();
        assert_eq!(serde_json::to_value(&settings).unwrap(), json!({"_name": ""}));
    }

    #[test]
    fn nested_records_default_when_absent() {
        let volume: storage::StorageVolume =
            serde_json::from_value(json!({"_name": "Macintosh HD"})).unwrap();
        assert_eq!(volume.physical_drive, None);
        assert_eq!(volume.free_space_in_bytes, None);
        assert!(volume.extra.is_empty());
    }

    #[test]
    fn mistyped_field_is_rejected() {
        let err = serde_json::from_value::<audio::AudioDevice>(json!({
            "_name": "x",
            "coreaudio_device_srate": "fast"
        }));
        assert!(err.is_err());
    }
}
