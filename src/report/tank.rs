use crate::{
    field::Field,
    message::{TankSummaryMessage, TankUpdateMessage},
    units::{self, Timestamp},
};

/// Pressure drop of one tank over the dive.
#[derive(Clone, Debug, PartialEq)]
pub struct TankSummary {
    pub timestamp: Option<Timestamp>,
    pub sensor: Option<u32>,
    /// bar
    pub start_pressure: Option<f64>,
    /// bar
    pub end_pressure: Option<f64>,
    /// L
    pub volume_used: Option<f64>,
}

impl TankSummary {
    pub fn from_message(m: &TankSummaryMessage) -> Self {
        Self {
            timestamp: m.timestamp.valid().map(Timestamp),
            sensor: m.sensor.valid_z(),
            start_pressure: m.start_pressure.valid().map(units::pressure),
            end_pressure: m.end_pressure.valid().map(units::pressure),
            volume_used: m.volume_used.valid().map(units::volume),
        }
    }
}

/// One tank pressure reading.
#[derive(Clone, Debug, PartialEq)]
pub struct TankUpdate {
    pub timestamp: Option<Timestamp>,
    pub sensor: Option<u32>,
    /// bar
    pub pressure: Option<f64>,
}

impl TankUpdate {
    pub fn from_message(m: &TankUpdateMessage) -> Self {
        Self {
            timestamp: m.timestamp.valid().map(Timestamp),
            sensor: m.sensor.valid_z(),
            pressure: m.pressure.valid().map(units::pressure),
        }
    }
}
