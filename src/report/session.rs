use crate::{
    category::{Decoded, Sport, SubSport, Vocabulary},
    field::Field,
    message::SessionMessage,
    units::{self, Position, Timestamp},
};

/// Whole-dive aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub timestamp: Option<Timestamp>,
    pub start_time: Option<Timestamp>,
    pub start_position: Option<Position>,
    pub end_position: Option<Position>,
    /// °C
    pub min_temperature: Option<f64>,
    /// °C
    pub avg_temperature: Option<f64>,
    /// °C
    pub max_temperature: Option<f64>,
    /// s
    pub total_elapsed_time: Option<f64>,
    /// s
    pub total_timer_time: Option<f64>,
    /// s
    pub total_moving_time: Option<f64>,
    /// m
    pub avg_depth: Option<f64>,
    /// m
    pub max_depth: Option<f64>,
    pub dive_number: Option<u32>,
    pub sport: Option<Decoded<Sport>>,
    pub sub_sport: Option<Decoded<SubSport>>,
    /// km/h
    pub avg_speed: Option<f64>,
    /// km/h
    pub max_speed: Option<f64>,
    /// km/h
    pub avg_pos_vertical_speed: Option<f64>,
    /// m
    pub total_distance: Option<f64>,
    pub num_laps: Option<u16>,
}

impl Session {
    pub fn from_message(m: &SessionMessage) -> Self {
        let avg_speed = m
            .enhanced_avg_speed
            .valid()
            .or_else(|| m.avg_speed.valid().map(u32::from));
        let max_speed = m
            .enhanced_max_speed
            .valid()
            .or_else(|| m.max_speed.valid().map(u32::from));

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
            min_temperature: m.min_temperature.valid().map(units::celsius),
            avg_temperature: m.avg_temperature.valid().map(units::celsius),
            max_temperature: m.max_temperature.valid().map(units::celsius),
            total_elapsed_time: m.total_elapsed_time.valid().map(units::seconds),
            total_timer_time: m.total_timer_time.valid().map(units::seconds),
            total_moving_time: m.total_moving_time.valid().map(units::seconds),
            avg_depth: m.avg_depth.valid().map(units::depth),
            max_depth: m.max_depth.valid().map(units::depth),
            dive_number: m.dive_number.valid(),
            sport: m.sport.valid().map(Sport::decode),
            sub_sport: m.sub_sport.valid().map(SubSport::decode),
            avg_speed: avg_speed.map(units::speed),
            max_speed: max_speed.map(units::speed),
            avg_pos_vertical_speed: m.avg_pos_vertical_speed.valid().map(units::vertical_speed),
            total_distance: m.total_distance.valid().map(units::distance),
            num_laps: m.num_laps.valid(),
        }
    }
}
