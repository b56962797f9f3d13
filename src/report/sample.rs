use alloc::vec::Vec;

use crate::{
    field::Field,
    message::RecordMessage,
    units::{self, Position, Timestamp},
};

/// One frame of continuous readings.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplePoint {
    pub timestamp: Option<Timestamp>,
    pub position: Option<Position>,
    /// m
    pub depth: Option<f64>,
    /// °C
    pub temperature: Option<f64>,
    /// bpm
    pub heart_rate: Option<u8>,
    /// %
    pub n2_load: Option<u16>,
    /// %
    pub cns_load: Option<u8>,
    /// m
    pub next_stop_depth: Option<f64>,
    /// s
    pub next_stop_time: Option<u32>,
    /// s
    pub time_to_surface: Option<u32>,
    /// s
    pub ndl_time: Option<u32>,
    /// bar
    pub absolute_pressure: Option<f64>,
    /// m
    pub altitude: Option<f64>,
}

impl SamplePoint {
    /// Map a record whose timestamp has already been resolved.
    pub fn from_message(m: &RecordMessage, timestamp: Option<Timestamp>) -> Self {
        let altitude = m
            .enhanced_altitude
            .valid()
            .or_else(|| m.altitude.valid().map(u32::from));

        Self {
            timestamp,
            position: Position::from_semicircles(m.position_lat.valid(), m.position_long.valid()),
            depth: m.depth.valid().map(units::depth),
            temperature: m.temperature.valid().map(units::celsius),
            heart_rate: m.heart_rate.valid(),
            n2_load: m.n2_load.valid(),
            cns_load: m.cns_load.valid(),
            next_stop_depth: m.next_stop_depth.valid().map(units::depth),
            next_stop_time: m.next_stop_time.valid(),
            time_to_surface: m.time_to_surface.valid(),
            ndl_time: m.ndl_time.valid(),
            absolute_pressure: m.absolute_pressure.valid().map(units::absolute_pressure),
            altitude: altitude.map(units::altitude),
        }
    }

    /// Map records in container order, each with its resolved timestamp.
    pub fn from_messages(records: &[RecordMessage], timestamps: &[Option<Timestamp>]) -> Vec<Self> {
        records
            .iter()
            .enumerate()
            .map(|(i, m)| Self::from_message(m, timestamps.get(i).copied().flatten()))
            .collect()
    }
}
