use alloc::string::String;

use crate::{
    category::{Decoded, Vocabulary, WaterType},
    field::{self, Field},
    message::DiveSettingsMessage,
    units::{self, Timestamp},
};

/// Dive parameters configured on the device when the dive was recorded.
///
/// Oxygen partial pressure thresholds are stored by the device as percent of
/// one bar and are always reported here in bar.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub timestamp: Option<Timestamp>,
    pub name: Option<String>,
    pub water_type: Option<Decoded<WaterType>>,
    /// kg/m³
    pub water_density: Option<f64>,
    /// %
    pub gf_low: Option<u8>,
    /// %
    pub gf_high: Option<u8>,
    /// bar
    pub po2_warn: Option<f64>,
    /// bar
    pub po2_critical: Option<f64>,
    /// bar
    pub po2_deco: Option<f64>,
    pub safety_stop_enabled: Option<bool>,
    /// m
    pub bottom_depth: Option<f64>,
    /// s
    pub bottom_time: Option<u32>,
    /// s
    pub repeat_dive_interval: Option<u16>,
    /// s
    pub safety_stop_time: Option<u16>,
}

impl Settings {
    pub fn from_message(m: &DiveSettingsMessage) -> Self {
        Self {
            timestamp: m.timestamp.valid().map(Timestamp),
            name: field::string(&m.name).map(String::from),
            water_type: m.water_type.valid().map(WaterType::decode),
            water_density: m.water_density.valid().map(f64::from),
            gf_low: m.gf_low.valid(),
            gf_high: m.gf_high.valid(),
            po2_warn: m.po2_warn.valid().map(units::partial_pressure),
            po2_critical: m.po2_critical.valid().map(units::partial_pressure),
            po2_deco: m.po2_deco.valid().map(units::partial_pressure),
            safety_stop_enabled: m.safety_stop_enabled.valid().map(|v| v == 1),
            bottom_depth: m.bottom_depth.valid().map(f64::from),
            bottom_time: m.bottom_time.valid(),
            repeat_dive_interval: m.repeat_dive_interval.valid(),
            safety_stop_time: m.safety_stop_time.valid(),
        }
    }
}
