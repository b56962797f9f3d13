use alloc::vec::Vec;
use core::fmt;

use crate::{
    category::{Decoded, DiveAlert, Event, EventType, TimerTrigger, Vocabulary},
    field::Field,
    message::EventMessage,
    units::Timestamp,
};

/// A discrete event of a dive.
#[derive(Clone, Debug, PartialEq)]
pub struct Alert {
    pub timestamp: Option<Timestamp>,
    pub event: Decoded<Event>,
    pub event_type: Decoded<EventType>,
    /// The raw payload.
    pub data: Option<u32>,
    /// The payload interpreted for the event; present exactly when the
    /// payload is.
    pub detail: Option<AlertDetail>,
}

/// The meaning of an event payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertDetail {
    DiveAlert(Decoded<DiveAlert>),
    Timer(Decoded<TimerTrigger>),
    /// Index of the gas switched to.
    GasSwitch(u32),
    /// A payload with no vocabulary of its own.
    Value(u32),
}

impl AlertDetail {
    /// Interpret a payload for its event category.
    pub fn interpret(event: Decoded<Event>, data: u32) -> Self {
        match event.known() {
            Some(Event::DiveAlert) => Self::DiveAlert(DiveAlert::decode(data)),
            Some(Event::Timer) => Self::Timer(TimerTrigger::decode(data)),
            Some(Event::DiveGasSwitched) => Self::GasSwitch(data),
            _ => Self::Value(data),
        }
    }
}

impl fmt::Display for AlertDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DiveAlert(Decoded::Known(alert)) => f.write_str(alert.label()),
            Self::Timer(Decoded::Known(trigger)) => f.write_str(trigger.label()),
            Self::DiveAlert(Decoded::Unrecognized(code))
            | Self::Timer(Decoded::Unrecognized(code)) => write!(f, "Unknown Alert Data({code})"),
            Self::GasSwitch(index) => write!(f, "Gas {index}"),
            Self::Value(data) => write!(f, "{data}"),
        }
    }
}

impl Alert {
    /// Map an event whose timestamp has already been resolved.
    ///
    /// Events without both a category and a sub-type are not alerts.
    pub fn from_message(m: &EventMessage, timestamp: Option<Timestamp>) -> Option<Self> {
        let (Some(event), Some(event_type)) = (m.event.valid(), m.event_type.valid()) else {
            log::trace!("Skipping event without category or sub-type at {timestamp:?}.");
            return None;
        };

        let event = Event::decode(event);
        let data = m.data.valid().or_else(|| m.data16.valid().map(u32::from));

        Some(Self {
            timestamp,
            event,
            event_type: EventType::decode(event_type),
            data,
            detail: data.map(|data| AlertDetail::interpret(event, data)),
        })
    }

    /// Map events in container order, each with its resolved timestamp.
    pub fn from_messages(events: &[EventMessage], timestamps: &[Option<Timestamp>]) -> Vec<Self> {
        events
            .iter()
            .enumerate()
            .filter_map(|(i, m)| Self::from_message(m, timestamps.get(i).copied().flatten()))
            .collect()
    }
}
