use alloc::string::String;

use crate::{
    category::{BatteryStatus, Decoded, FileKind, Manufacturer, Vocabulary},
    field::{self, Field},
    message::{DeviceInfoMessage, FileIdMessage},
    units::{self, Timestamp},
};

/// Where a container came from.
#[derive(Clone, Debug, PartialEq)]
pub struct FileIdentity {
    pub kind: Option<Decoded<FileKind>>,
    pub manufacturer: Option<Decoded<Manufacturer>>,
    pub product: Option<u16>,
    pub serial_number: Option<u32>,
    pub time_created: Option<Timestamp>,
    pub product_name: Option<String>,
}

impl FileIdentity {
    pub fn from_message(m: &FileIdMessage) -> Self {
        Self {
            kind: m.type_.valid().map(FileKind::decode),
            manufacturer: m.manufacturer.valid().map(Manufacturer::decode),
            product: m.product.valid(),
            serial_number: m.serial_number.valid_z(),
            time_created: m.time_created.valid().map(Timestamp),
            product_name: field::string(&m.product_name).map(String::from),
        }
    }
}

/// A device, or a sensor paired with one, that took part in the dive.
#[derive(Clone, Debug, PartialEq)]
pub struct DeviceInfo {
    pub timestamp: Option<Timestamp>,
    pub device_index: Option<u8>,
    pub device_type: Option<u8>,
    pub manufacturer: Option<Decoded<Manufacturer>>,
    pub product: Option<u16>,
    pub serial_number: Option<u32>,
    pub software_version: Option<f64>,
    pub hardware_version: Option<u8>,
    /// V
    pub battery_voltage: Option<f64>,
    pub battery_status: Option<Decoded<BatteryStatus>>,
    pub product_name: Option<String>,
}

impl DeviceInfo {
    pub fn from_message(m: &DeviceInfoMessage) -> Self {
        Self {
            timestamp: m.timestamp.valid().map(Timestamp),
            device_index: m.device_index.valid(),
            device_type: m.device_type.valid(),
            manufacturer: m.manufacturer.valid().map(Manufacturer::decode),
            product: m.product.valid(),
            serial_number: m.serial_number.valid_z(),
            software_version: m.software_version.valid().map(units::version),
            hardware_version: m.hardware_version.valid(),
            battery_voltage: m.battery_voltage.valid().map(units::voltage),
            battery_status: m.battery_status.valid().map(BatteryStatus::decode),
            product_name: field::string(&m.product_name).map(String::from),
        }
    }
}
