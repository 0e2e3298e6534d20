//! `SPPowerDataType` records.
//!
//! Power items are heterogeneous: battery information, AC/battery power
//! settings and scheduled events all arrive as siblings, so every section is
//! optional and absent sections stay `None`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerInfo {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_charge_info: Option<BatteryChargeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_health_info: Option<BatteryHealthInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_model_info: Option<BatteryModelInfo>,
    #[serde(rename = "AC Power", skip_serializing_if = "Option::is_none")]
    pub ac_power: Option<PowerSettings>,
    #[serde(rename = "Battery Power", skip_serializing_if = "Option::is_none")]
    pub battery_power: Option<PowerSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_ups_installed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_charger_connected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_is_charging: Option<String>,
    #[serde(rename = "_items", skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ScheduledEventGroup>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryChargeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_at_warn_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_fully_charged: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_is_charging: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_state_of_charge: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryHealthInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_cycle_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_health: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_health_maximum_capacity: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryModelInfo {
    #[serde(rename = "Pack Lot Code", skip_serializing_if = "Option::is_none")]
    pub pack_lot_code: Option<String>,
    #[serde(rename = "PCB Lot Code", skip_serializing_if = "Option::is_none")]
    pub pcb_lot_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_cell_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_firmware_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_hardware_revision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sppower_battery_serial_number: Option<String>,
}

/// Energy settings for one power source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerSettings {
    #[serde(rename = "Current Power Source", skip_serializing_if = "Option::is_none")]
    pub current_power_source: Option<String>,
    #[serde(rename = "Disk Sleep Timer", skip_serializing_if = "Option::is_none")]
    pub disk_sleep_timer: Option<i64>,
    #[serde(rename = "Display Sleep Timer", skip_serializing_if = "Option::is_none")]
    pub display_sleep_timer: Option<i64>,
    #[serde(rename = "Hibernate Mode", skip_serializing_if = "Option::is_none")]
    pub hibernate_mode: Option<i64>,
    #[serde(rename = "LowPowerMode", skip_serializing_if = "Option::is_none")]
    pub low_power_mode: Option<String>,
    #[serde(
        rename = "PrioritizeNetworkReachabilityOverSleep",
        skip_serializing_if = "Option::is_none"
    )]
    pub prioritize_network_reachability_over_sleep: Option<String>,
    #[serde(rename = "ReduceBrightness", skip_serializing_if = "Option::is_none")]
    pub reduce_brightness: Option<String>,
    #[serde(rename = "Sleep On Power Button", skip_serializing_if = "Option::is_none")]
    pub sleep_on_power_button: Option<String>,
    #[serde(rename = "System Sleep Timer", skip_serializing_if = "Option::is_none")]
    pub system_sleep_timer: Option<i64>,
    #[serde(rename = "Wake On LAN", skip_serializing_if = "Option::is_none")]
    pub wake_on_lan: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledEventGroup {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_items", skip_serializing_if = "Vec::is_empty")]
    pub schedules: Vec<ScheduledEventList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledEventList {
    #[serde(rename = "_name")]
    pub name: String,
    #[serde(rename = "_items", skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<ScheduledEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduledEvent {
    #[serde(rename = "appPID", skip_serializing_if = "Option::is_none")]
    pub app_pid: Option<i64>,
    #[serde(rename = "eventtype", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(rename = "scheduledby", skip_serializing_if = "Option::is_none")]
    pub scheduled_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "UserVisible", skip_serializing_if = "Option::is_none")]
    pub user_visible: Option<bool>,
}
