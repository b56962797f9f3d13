use crate::{
    field::Field,
    message::DiveSummaryMessage,
    units::{self, Timestamp},
};

use super::{MessageKind, Session};

/// Dive computer aggregate of a whole dive.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub timestamp: Option<Timestamp>,
    pub dive_number: Option<u32>,
    /// m
    pub avg_depth: Option<f64>,
    /// m
    pub max_depth: Option<f64>,
    /// s
    pub surface_interval: Option<u32>,
    /// s
    pub descent_time: Option<f64>,
    /// s
    pub ascent_time: Option<f64>,
    /// s
    ///
    /// When the summary does not record a bottom time, this is the session's
    /// total elapsed time instead.
    pub bottom_time: Option<f64>,
    /// %
    pub start_cns: Option<u8>,
    /// %
    pub end_cns: Option<u8>,
    /// %
    pub start_n2: Option<u16>,
    /// %
    pub end_n2: Option<u16>,
    /// OTU
    pub o2_toxicity: Option<u16>,
}

impl Summary {
    /// Map a dive summary. Bottom time falls back to the session's total
    /// elapsed time when the summary does not record it.
    pub fn from_message(m: &DiveSummaryMessage, session: &Session) -> Self {
        Self {
            timestamp: m.timestamp.valid().map(Timestamp),
            dive_number: m.dive_number.valid(),
            avg_depth: m.avg_depth.valid().map(units::depth),
            max_depth: m.max_depth.valid().map(units::depth),
            surface_interval: m.surface_interval.valid(),
            descent_time: m.descent_time.valid().map(units::seconds),
            ascent_time: m.ascent_time.valid().map(units::seconds),
            bottom_time: m
                .bottom_time
                .valid()
                .map(units::seconds)
                .or(session.total_elapsed_time),
            start_cns: m.start_cns.valid(),
            end_cns: m.end_cns.valid(),
            start_n2: m.start_n2.valid(),
            end_n2: m.end_n2.valid(),
            o2_toxicity: m.o2_toxicity.valid(),
        }
    }

    /// Pick the summary of the whole dive: the first one referencing the
    /// session, else the first one.
    pub fn select(summaries: &[DiveSummaryMessage]) -> Option<&DiveSummaryMessage> {
        summaries
            .iter()
            .find(|s| s.reference_mesg.valid() == Some(MessageKind::Session.global()))
            .or_else(|| summaries.first())
    }
}
