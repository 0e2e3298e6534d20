//! Closed registry of `system_profiler` data categories.
//!
//! Each category is bound at build time to the envelope shape the tool uses
//! for it and to exactly one record schema. The table below is the only
//! place that binding lives: it generates the [`Category`] enum, the marker
//! types in [`schema`], and the [`CategoryVisitor`] dispatch that lets untyped
//! callers (CLIs, `ensure_initialized`) reach the typed machinery.

use crate::records::{
    GenericRecord, airport, applications, audio, bluetooth, displays, firewall, fonts, hardware,
    memory, network, nvme, power, secure_element, software, storage, thunderbolt, usb,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// JSON structural convention a category's payload uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnvelopeShape {
    /// `[{"_name": ..., "_items": [records]}]`
    Items,
    /// `[records]`
    Array,
    /// `[{field: value, ...}]`
    Object,
}

impl EnvelopeShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeShape::Items => "items",
            EnvelopeShape::Array => "array",
            EnvelopeShape::Object => "object",
        }
    }
}

impl fmt::Display for EnvelopeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binds a category to the record type its container holds.
///
/// Sealed: the only implementations are the marker types in [`schema`],
/// one per [`Category`].
pub trait Schema: sealed::Sealed + Send + Sync + 'static {
    const CATEGORY: Category;
    type Record: Serialize
        + DeserializeOwned
        + Clone
        + fmt::Debug
        + PartialEq
        + Send
        + Sync
        + 'static;
}

mod sealed {
    pub trait Sealed {}
}

/// Reaches the typed schema for a category known only at runtime.
pub trait CategoryVisitor {
    type Output;

    fn visit<S: Schema>(self) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

macro_rules! category_table {
    ($( $variant:ident => $key:literal, $shape:ident, $record:ty; )*) => {
        /// One inventory domain understood by `system_profiler`.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Category {
            $($variant,)*
        }

        impl Category {
            /// Every registered category, in registry order.
            pub const ALL: &'static [Category] = &[$(Category::$variant,)*];

            /// Key passed to the tool and expected at the top of its output.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Category::$variant => $key,)*
                }
            }

            pub fn shape(&self) -> EnvelopeShape {
                match self {
                    $(Category::$variant => EnvelopeShape::$shape,)*
                }
            }

            pub fn visit<V: CategoryVisitor>(&self, visitor: V) -> V::Output {
                match self {
                    $(Category::$variant => visitor.visit::<schema::$variant>(),)*
                }
            }
        }

        /// Marker types binding each category to its record schema.
        pub mod schema {
            use super::*;

            $(
                #[derive(Clone, Copy, Debug, Default)]
                pub struct $variant;

                impl sealed::Sealed for $variant {}

                impl Schema for $variant {
                    const CATEGORY: Category = Category::$variant;
                    type Record = $record;
                }
            )*
        }
    };
}

category_table! {
    ParallelAta => "SPParallelATADataType", Array, GenericRecord;
    UniversalAccess => "SPUniversalAccessDataType", Array, GenericRecord;
    SecureElement => "SPSecureElementDataType", Items, secure_element::SecureElement;
    Applications => "SPApplicationsDataType", Array, applications::Application;
    Audio => "SPAudioDataType", Items, audio::AudioDevice;
    Bluetooth => "SPBluetoothDataType", Items, bluetooth::BluetoothInfo;
    Camera => "SPCameraDataType", Items, GenericRecord;
    CardReader => "SPCardReaderDataType", Array, GenericRecord;
    IBridge => "SPiBridgeDataType", Items, GenericRecord;
    DeveloperTools => "SPDeveloperToolsDataType", Array, GenericRecord;
    Diagnostics => "SPDiagnosticsDataType", Items, GenericRecord;
    DisabledSoftware => "SPDisabledSoftwareDataType", Items, GenericRecord;
    DiscBurning => "SPDiscBurningDataType", Array, GenericRecord;
    Ethernet => "SPEthernetDataType", Array, GenericRecord;
    Extensions => "SPExtensionsDataType", Array, GenericRecord;
    FibreChannel => "SPFibreChannelDataType", Items, GenericRecord;
    FireWire => "SPFireWireDataType", Array, GenericRecord;
    Firewall => "SPFirewallDataType", Items, firewall::FirewallSettings;
    Fonts => "SPFontsDataType", Items, fonts::Font;
    Frameworks => "SPFrameworksDataType", Array, GenericRecord;
    Displays => "SPDisplaysDataType", Items, displays::GraphicsCard;
    Hardware => "SPHardwareDataType", Object, hardware::HardwareOverview;
    InstallHistory => "SPInstallHistoryDataType", Items, GenericRecord;
    International => "SPInternationalDataType", Array, GenericRecord;
    LegacySoftware => "SPLegacySoftwareDataType", Array, GenericRecord;
    NetworkLocation => "SPNetworkLocationDataType", Array, GenericRecord;
    Logs => "SPLogsDataType", Items, GenericRecord;
    ManagedClient => "SPManagedClientDataType", Items, GenericRecord;
    Memory => "SPMemoryDataType", Items, memory::MemoryModule;
    Nvme => "SPNVMeDataType", Items, nvme::NvmeController;
    Network => "SPNetworkDataType", Items, network::NetworkService;
    Pci => "SPPCIDataType", Array, GenericRecord;
    ParallelScsi => "SPParallelSCSIDataType", Array, GenericRecord;
    Power => "SPPowerDataType", Items, power::PowerInfo;
    PrefPane => "SPPrefPaneDataType", Array, GenericRecord;
    PrintersSoftware => "SPPrintersSoftwareDataType", Items, GenericRecord;
    Printers => "SPPrintersDataType", Items, GenericRecord;
    ConfigurationProfile => "SPConfigurationProfileDataType", Items, GenericRecord;
    RawCamera => "SPRawCameraDataType", Array, GenericRecord;
    Sas => "SPSASDataType", Array, GenericRecord;
    SerialAta => "SPSerialATADataType", Items, GenericRecord;
    Spi => "SPSPIDataType", Array, GenericRecord;
    SmartCards => "SPSmartCardsDataType", Array, GenericRecord;
    Software => "SPSoftwareDataType", Items, software::SoftwareOverview;
    StartupItem => "SPStartupItemDataType", Array, GenericRecord;
    Storage => "SPStorageDataType", Items, storage::StorageVolume;
    SyncServices => "SPSyncServicesDataType", Items, GenericRecord;
    Thunderbolt => "SPThunderboltDataType", Items, thunderbolt::ThunderboltBus;
    Usb => "SPUSBDataType", Items, usb::UsbBus;
    NetworkVolume => "SPNetworkVolumeDataType", Array, GenericRecord;
    AirPort => "SPAirPortDataType", Items, airport::AirPortInfo;
}

impl Category {
    /// Lowercase alias used on the command line (`SPAudioDataType` -> `audio`).
    pub fn short_name(&self) -> String {
        let key = self.as_str();
        let trimmed = key.strip_prefix("SP").unwrap_or(key);
        let trimmed = trimmed.strip_suffix("DataType").unwrap_or(trimmed);
        trimmed.to_ascii_lowercase()
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the exact tool key or its case-insensitive short alias.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Some(category) = Category::ALL.iter().find(|c| c.as_str() == trimmed) {
            return Ok(*category);
        }
        Category::ALL
            .iter()
            .find(|c| c.short_name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

impl TryFrom<&str> for Category {
    type Error = UnknownCategory;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
