//! Raw messages of a dive container, as published by a decoder.
//!
//! Each struct receives the fields of one message kind, unconverted. Field
//! numbers and base types follow the FIT profile; a `z` in a field's comment
//! marks a base type for which zero is invalid.

use alloc::{collections::BTreeMap, vec::Vec};

use crate::{
    field::Field,
    listener::{FromMessage, FromMessages},
    units::{Timestamp, TimestampResolver},
};

/// Global message numbers of the kinds a dive report is built from.
pub mod global {
    pub const FILE_ID: u16 = 0;
    pub const SESSION: u16 = 18;
    pub const LAP: u16 = 19;
    pub const RECORD: u16 = 20;
    pub const EVENT: u16 = 21;
    pub const DEVICE_INFO: u16 = 23;
    pub const DIVE_SETTINGS: u16 = 258;
    pub const DIVE_GAS: u16 = 259;
    pub const DIVE_SUMMARY: u16 = 268;
    pub const TANK_UPDATE: u16 = 319;
    pub const TANK_SUMMARY: u16 = 323;
}

/// Every message of a container that a dive report uses, per kind and in
/// container order.
#[derive(Debug, Default, FromMessages)]
pub struct Messages {
    #[message(0)]
    pub file_ids: Vec<FileIdMessage>,
    #[message(18)]
    pub sessions: Vec<SessionMessage>,
    #[message(19)]
    pub laps: Vec<LapMessage>,
    #[message(20)]
    pub records: Vec<RecordMessage>,
    #[message(21)]
    pub events: Vec<EventMessage>,
    #[message(23)]
    pub device_infos: Vec<DeviceInfoMessage>,
    #[message(258)]
    pub dive_settings: Vec<DiveSettingsMessage>,
    #[message(259)]
    pub dive_gases: Vec<DiveGasMessage>,
    #[message(268)]
    pub dive_summaries: Vec<DiveSummaryMessage>,
    #[message(319)]
    pub tank_updates: Vec<TankUpdateMessage>,
    #[message(323)]
    pub tank_summaries: Vec<TankSummaryMessage>,
    /// Global numbers of the messages above, in container order.
    #[message(order)]
    pub order: Vec<u16>,
}

/// Resolved timestamps of records and events, index for index.
#[derive(Debug, Default, PartialEq)]
pub struct Timeline {
    pub records: Vec<Option<Timestamp>>,
    pub events: Vec<Option<Timestamp>>,
}

impl Messages {
    /// Resolve the timestamps of records and events in container order.
    ///
    /// A compressed offset rolls forward from the last full timestamp of any
    /// message kind. Messages missing from [`Messages::order`] keep their own
    /// full timestamp, if any.
    pub fn timeline(&self) -> Timeline {
        let mut timeline = Timeline {
            records: self.records.iter().map(|m| m.timestamp.valid().map(Timestamp)).collect(),
            events: self.events.iter().map(|m| m.timestamp.valid().map(Timestamp)).collect(),
        };

        let mut resolver = TimestampResolver::default();
        let mut seen: BTreeMap<u16, usize> = BTreeMap::new();

        for &number in &self.order {
            let next = seen.entry(number).or_default();
            let index = *next;
            *next += 1;

            let r = &mut resolver;

            match number {
                global::RECORD => {
                    let resolved = step(r, &self.records, index);
                    if let Some(slot) = timeline.records.get_mut(index) {
                        *slot = resolved;
                    }
                }
                global::EVENT => {
                    let resolved = step(r, &self.events, index);
                    if let Some(slot) = timeline.events.get_mut(index) {
                        *slot = resolved;
                    }
                }
                global::SESSION => _ = step(r, &self.sessions, index),
                global::LAP => _ = step(r, &self.laps, index),
                global::DEVICE_INFO => _ = step(r, &self.device_infos, index),
                global::DIVE_SETTINGS => _ = step(r, &self.dive_settings, index),
                global::DIVE_SUMMARY => _ = step(r, &self.dive_summaries, index),
                global::TANK_UPDATE => _ = step(r, &self.tank_updates, index),
                global::TANK_SUMMARY => _ = step(r, &self.tank_summaries, index),
                _ => {}
            }
        }

        timeline
    }
}

fn step<M: Timed>(
    resolver: &mut TimestampResolver,
    messages: &[M],
    index: usize,
) -> Option<Timestamp> {
    let m = messages.get(index)?;
    resolver.resolve(m.timestamp().valid(), m.time_offset())
}

/// Header-level timing of a raw message.
pub trait Timed {
    /// The full timestamp (field 253), if received.
    fn timestamp(&self) -> Option<u32>;

    /// The offset of a compressed timestamp header, if received.
    fn time_offset(&self) -> Option<u8> {
        None
    }
}

macro_rules! timed {
    (offset: $($message:ty),+ $(,)?) => {
        $(
            impl Timed for $message {
                fn timestamp(&self) -> Option<u32> {
                    self.timestamp
                }

                fn time_offset(&self) -> Option<u8> {
                    self.time_offset
                }
            }
        )+
    };
    ($($message:ty),+ $(,)?) => {
        $(
            impl Timed for $message {
                fn timestamp(&self) -> Option<u32> {
                    self.timestamp
                }
            }
        )+
    };
}

timed!(
    SessionMessage,
    LapMessage,
    DeviceInfoMessage,
    DiveSettingsMessage,
    DiveSummaryMessage,
    TankUpdateMessage,
    TankSummaryMessage,
);

timed!(offset: RecordMessage, EventMessage);

#[derive(Debug, Default, FromMessage)]
pub struct FileIdMessage {
    #[field(0)]
    pub type_: Option<u8>,
    #[field(1)]
    pub manufacturer: Option<u16>,
    #[field(2)]
    pub product: Option<u16>,
    /// z
    #[field(3)]
    pub serial_number: Option<u32>,
    #[field(4)]
    pub time_created: Option<u32>,
    #[field(8, |v, c: u8| v.push(c))]
    pub product_name: Vec<u8>,
}

#[derive(Debug, Default, FromMessage)]
pub struct SessionMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(2)]
    pub start_time: Option<u32>,
    #[field(3)]
    pub start_position_lat: Option<i32>,
    #[field(4)]
    pub start_position_long: Option<i32>,
    #[field(5)]
    pub sport: Option<u8>,
    #[field(6)]
    pub sub_sport: Option<u8>,
    /// ms
    #[field(7)]
    pub total_elapsed_time: Option<u32>,
    /// ms
    #[field(8)]
    pub total_timer_time: Option<u32>,
    /// cm
    #[field(9)]
    pub total_distance: Option<u32>,
    /// mm/s
    #[field(14)]
    pub avg_speed: Option<u16>,
    /// mm/s
    #[field(15)]
    pub max_speed: Option<u16>,
    #[field(26)]
    pub num_laps: Option<u16>,
    #[field(38)]
    pub end_position_lat: Option<i32>,
    #[field(39)]
    pub end_position_long: Option<i32>,
    #[field(57)]
    pub avg_temperature: Option<i8>,
    #[field(58)]
    pub max_temperature: Option<i8>,
    /// ms
    #[field(59)]
    pub total_moving_time: Option<u32>,
    /// mm/s
    #[field(60)]
    pub avg_pos_vertical_speed: Option<i16>,
    /// mm/s
    #[field(124)]
    pub enhanced_avg_speed: Option<u32>,
    /// mm/s
    #[field(125)]
    pub enhanced_max_speed: Option<u32>,
    /// mm
    #[field(140)]
    pub avg_depth: Option<u32>,
    /// mm
    #[field(141)]
    pub max_depth: Option<u32>,
    #[field(150)]
    pub min_temperature: Option<i8>,
    #[field(156)]
    pub dive_number: Option<u32>,
}

#[derive(Debug, Default, FromMessage)]
pub struct LapMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(2)]
    pub start_time: Option<u32>,
    #[field(3)]
    pub start_position_lat: Option<i32>,
    #[field(4)]
    pub start_position_long: Option<i32>,
    #[field(5)]
    pub end_position_lat: Option<i32>,
    #[field(6)]
    pub end_position_long: Option<i32>,
    /// ms
    #[field(7)]
    pub total_elapsed_time: Option<u32>,
    /// ms
    #[field(8)]
    pub total_timer_time: Option<u32>,
    /// cm
    #[field(9)]
    pub total_distance: Option<u32>,
    /// mm/s
    #[field(13)]
    pub avg_speed: Option<u16>,
    /// mm/s
    #[field(14)]
    pub max_speed: Option<u16>,
    #[field(42)]
    pub avg_altitude: Option<u16>,
    #[field(43)]
    pub max_altitude: Option<u16>,
    #[field(62)]
    pub min_altitude: Option<u16>,
    #[field(110)]
    pub enhanced_avg_speed: Option<u32>,
    #[field(111)]
    pub enhanced_max_speed: Option<u32>,
    #[field(112)]
    pub enhanced_avg_altitude: Option<u32>,
    #[field(113)]
    pub enhanced_min_altitude: Option<u32>,
    #[field(114)]
    pub enhanced_max_altitude: Option<u32>,
    /// mm
    #[field(122)]
    pub avg_depth: Option<u32>,
    /// mm
    #[field(123)]
    pub max_depth: Option<u32>,
}

#[derive(Debug, Default, FromMessage)]
pub struct RecordMessage {
    #[field(time)]
    pub time_offset: Option<u8>,
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub position_lat: Option<i32>,
    #[field(1)]
    pub position_long: Option<i32>,
    #[field(2)]
    pub altitude: Option<u16>,
    #[field(3)]
    pub heart_rate: Option<u8>,
    #[field(13)]
    pub temperature: Option<i8>,
    #[field(78)]
    pub enhanced_altitude: Option<u32>,
    /// Pa
    #[field(91)]
    pub absolute_pressure: Option<u32>,
    /// mm
    #[field(92)]
    pub depth: Option<u32>,
    /// mm
    #[field(93)]
    pub next_stop_depth: Option<u32>,
    /// s
    #[field(94)]
    pub next_stop_time: Option<u32>,
    /// s
    #[field(95)]
    pub time_to_surface: Option<u32>,
    /// s
    #[field(96)]
    pub ndl_time: Option<u32>,
    /// %
    #[field(97)]
    pub cns_load: Option<u8>,
    /// %
    #[field(98)]
    pub n2_load: Option<u16>,
}

#[derive(Debug, Default, FromMessage)]
pub struct EventMessage {
    #[field(time)]
    pub time_offset: Option<u8>,
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub event: Option<u8>,
    #[field(1)]
    pub event_type: Option<u8>,
    #[field(2)]
    pub data16: Option<u16>,
    #[field(3)]
    pub data: Option<u32>,
}

#[derive(Debug, Default, FromMessage)]
pub struct DeviceInfoMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0)]
    pub device_index: Option<u8>,
    #[field(1)]
    pub device_type: Option<u8>,
    #[field(2)]
    pub manufacturer: Option<u16>,
    /// z
    #[field(3)]
    pub serial_number: Option<u32>,
    #[field(4)]
    pub product: Option<u16>,
    #[field(5)]
    pub software_version: Option<u16>,
    #[field(6)]
    pub hardware_version: Option<u8>,
    #[field(10)]
    pub battery_voltage: Option<u16>,
    #[field(11)]
    pub battery_status: Option<u8>,
    #[field(27, |v, c: u8| v.push(c))]
    pub product_name: Vec<u8>,
}

#[derive(Debug, Default, FromMessage)]
pub struct DiveSettingsMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    #[field(0, |v, c: u8| v.push(c))]
    pub name: Vec<u8>,
    /// %
    #[field(2)]
    pub gf_low: Option<u8>,
    /// %
    #[field(3)]
    pub gf_high: Option<u8>,
    #[field(4)]
    pub water_type: Option<u8>,
    /// kg/m³
    #[field(5)]
    pub water_density: Option<f32>,
    /// Percent of one bar.
    #[field(6)]
    pub po2_warn: Option<u8>,
    /// Percent of one bar.
    #[field(7)]
    pub po2_critical: Option<u8>,
    /// Percent of one bar.
    #[field(8)]
    pub po2_deco: Option<u8>,
    #[field(9)]
    pub safety_stop_enabled: Option<u8>,
    /// m
    #[field(10)]
    pub bottom_depth: Option<f32>,
    /// s
    #[field(11)]
    pub bottom_time: Option<u32>,
    /// s
    #[field(17)]
    pub repeat_dive_interval: Option<u16>,
    /// s
    #[field(18)]
    pub safety_stop_time: Option<u16>,
}

#[derive(Debug, Default, FromMessage)]
pub struct DiveGasMessage {
    #[field(254)]
    pub message_index: Option<u16>,
    #[field(0)]
    pub helium_content: Option<u8>,
    #[field(1)]
    pub oxygen_content: Option<u8>,
    #[field(2)]
    pub status: Option<u8>,
    #[field(3)]
    pub mode: Option<u8>,
}

#[derive(Debug, Default, FromMessage)]
pub struct DiveSummaryMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    /// Global number of the message this summary belongs to.
    #[field(0)]
    pub reference_mesg: Option<u16>,
    /// mm
    #[field(2)]
    pub avg_depth: Option<u32>,
    /// mm
    #[field(3)]
    pub max_depth: Option<u32>,
    /// s
    #[field(4)]
    pub surface_interval: Option<u32>,
    #[field(5)]
    pub start_cns: Option<u8>,
    #[field(6)]
    pub end_cns: Option<u8>,
    #[field(7)]
    pub start_n2: Option<u16>,
    #[field(8)]
    pub end_n2: Option<u16>,
    #[field(9)]
    pub o2_toxicity: Option<u16>,
    #[field(10)]
    pub dive_number: Option<u32>,
    /// ms
    #[field(11)]
    pub bottom_time: Option<u32>,
    /// ms
    #[field(15)]
    pub descent_time: Option<u32>,
    /// ms
    #[field(16)]
    pub ascent_time: Option<u32>,
}

#[derive(Debug, Default, FromMessage)]
pub struct TankUpdateMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    /// z
    #[field(0)]
    pub sensor: Option<u32>,
    /// cbar
    #[field(1)]
    pub pressure: Option<u16>,
}

#[derive(Debug, Default, FromMessage)]
pub struct TankSummaryMessage {
    #[field(253)]
    pub timestamp: Option<u32>,
    /// z
    #[field(0)]
    pub sensor: Option<u32>,
    /// cbar
    #[field(1)]
    pub start_pressure: Option<u16>,
    /// cbar
    #[field(2)]
    pub end_pressure: Option<u16>,
    /// cl
    #[field(3)]
    pub volume_used: Option<u32>,
}
