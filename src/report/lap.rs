use crate::{
    field::Field,
    message::LapMessage,
    units::{self, Position, Timestamp},
};

use super::{SamplePoint, Session};

/// A timed segment of a dive.
#[derive(Clone, Debug, PartialEq)]
pub struct Lap {
    pub timestamp: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub start_position: Option<Position>,
    pub end_position: Option<Position>,
    /// s
    pub total_elapsed_time: Option<f64>,
    /// s
    pub total_timer_time: Option<f64>,
    /// m
    pub total_distance: Option<f64>,
    /// km/h
    pub avg_speed: Option<f64>,
    /// km/h
    pub max_speed: Option<f64>,
    /// m
    pub min_altitude: Option<f64>,
    /// m
    pub avg_altitude: Option<f64>,
    /// m
    pub max_altitude: Option<f64>,
    /// m
    pub avg_depth: Option<f64>,
    /// m
    pub max_depth: Option<f64>,
    /// Whether this lap stands in for a container without laps.
    pub synthesized: bool,
}

impl Lap {
    pub fn from_message(m: &LapMessage) -> Self {
        let speed = |enhanced: Option<u32>, legacy: Option<u16>| {
            enhanced
                .valid()
                .or_else(|| legacy.valid().map(u32::from))
                .map(units::speed)
        };
        let altitude = |enhanced: Option<u32>, legacy: Option<u16>| {
            enhanced
                .valid()
                .or_else(|| legacy.valid().map(u32::from))
                .map(units::altitude)
        };

        Self {
            timestamp: m.timestamp.valid().map(Timestamp),
            start_time: m.start_time.valid().map(Timestamp),
            start_position: Position::from_semicircles(
                m.start_position_lat.valid(),
                m.start_position_long.valid(),
            ),
            end_position: Position::from_semicircles(
                m.end_position_lat.valid(),
                m.end_position_long.valid(),
            ),
            total_elapsed_time: m.total_elapsed_time.valid().map(units::seconds),
            total_timer_time: m.total_timer_time.valid().map(units::seconds),
            total_distance: m.total_distance.valid().map(units::distance),
            avg_speed: speed(m.enhanced_avg_speed, m.avg_speed),
            max_speed: speed(m.enhanced_max_speed, m.max_speed),
            min_altitude: altitude(m.enhanced_min_altitude, m.min_altitude),
            avg_altitude: altitude(m.enhanced_avg_altitude, m.avg_altitude),
            max_altitude: altitude(m.enhanced_max_altitude, m.max_altitude),
            avg_depth: m.avg_depth.valid().map(units::depth),
            max_depth: m.max_depth.valid().map(units::depth),
            synthesized: false,
        }
    }

    /// Build the single lap of a container that recorded none.
    ///
    /// Missing session coordinates are taken from the first and last samples
    /// with a position; without such samples they stay absent.
    pub fn synthesize(session: &Session, samples: &[SamplePoint]) -> Self {
        let start_position = session
            .start_position
            .or_else(|| samples.iter().find_map(|s| s.position));
        let end_position = session
            .end_position
            .or_else(|| samples.iter().rev().find_map(|s| s.position));

        Self {
            timestamp: session.timestamp,
            start_time: session.start_time,
            start_position,
            end_position,
            total_elapsed_time: session.total_elapsed_time,
            total_timer_time: session.total_timer_time,
            total_distance: session.total_distance,
            avg_speed: session.avg_speed,
            max_speed: session.max_speed,
            min_altitude: None,
            avg_altitude: None,
            max_altitude: None,
            avg_depth: session.avg_depth,
            max_depth: session.max_depth,
            synthesized: true,
        }
    }
}
