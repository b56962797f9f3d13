//! Assembly of a dive report from the messages of one container.
//!
//! Assembly is a short state machine. An [`Assembler`] hands the container
//! to a [`Decoder`], yielding an [`Extraction`] of raw messages, which is
//! then mapped into a [`DiveReport`]. Each step either advances or fails
//! with a [`ParseError`]; nothing is retried, and no partial report is ever
//! returned.
//!
//! ```
//! let report = regulator::report::parse_path("dive.fit", MyDecoder)?;
//! println!("{:?}", report.session().max_depth);
//! ```

use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use thiserror::Error;

use crate::{
    listener::Decoder,
    message::{Messages, global},
};

mod alert;
mod device;
mod gas;
mod lap;
mod sample;
mod session;
mod settings;
mod summary;
mod tank;

pub use alert::{Alert, AlertDetail};
pub use device::{DeviceInfo, FileIdentity};
pub use gas::Gas;
pub use lap::Lap;
pub use sample::SamplePoint;
pub use session::Session;
pub use settings::Settings;
pub use summary::Summary;
pub use tank::{TankSummary, TankUpdate};

/// Kinds of message a dive report is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageKind {
    FileId,
    Session,
    Lap,
    Record,
    Event,
    DeviceInfo,
    DiveSettings,
    DiveGas,
    DiveSummary,
    TankUpdate,
    TankSummary,
}

impl MessageKind {
    /// The global message number of this kind.
    pub fn global(self) -> u16 {
        match self {
            Self::FileId => global::FILE_ID,
            Self::Session => global::SESSION,
            Self::Lap => global::LAP,
            Self::Record => global::RECORD,
            Self::Event => global::EVENT,
            Self::DeviceInfo => global::DEVICE_INFO,
            Self::DiveSettings => global::DIVE_SETTINGS,
            Self::DiveGas => global::DIVE_GAS,
            Self::DiveSummary => global::DIVE_SUMMARY,
            Self::TankUpdate => global::TANK_UPDATE,
            Self::TankSummary => global::TANK_SUMMARY,
        }
    }

    /// The profile name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::FileId => "file_id",
            Self::Session => "session",
            Self::Lap => "lap",
            Self::Record => "record",
            Self::Event => "event",
            Self::DeviceInfo => "device_info",
            Self::DiveSettings => "dive_settings",
            Self::DiveGas => "dive_gas",
            Self::DiveSummary => "dive_summary",
            Self::TankUpdate => "tank_update",
            Self::TankSummary => "tank_summary",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors failing the assembly of a dive report.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The container could not be read or decoded.
    #[error("Failed to decode the container: {0}.")]
    DecodeFailure(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// The container lacks a message the report cannot exist without.
    #[error("The container holds no {0} message.")]
    MissingMandatoryMessage(MessageKind),
}

/// A complete dive, mapped from one container.
///
/// A report always holds a session and at least one lap.
#[derive(Clone, Debug, PartialEq)]
pub struct DiveReport {
    session: Session,
    summary: Option<Summary>,
    settings: Option<Settings>,
    file_identity: Option<FileIdentity>,
    devices: Vec<DeviceInfo>,
    tank_summaries: Vec<TankSummary>,
    tank_updates: Vec<TankUpdate>,
    samples: Vec<SamplePoint>,
    alerts: Vec<Alert>,
    gases: Vec<Gas>,
    laps: Vec<Lap>,
}

impl DiveReport {
    /// Map the messages of a container.
    ///
    /// Only a missing session fails; every other kind may be absent. The
    /// first session, settings and file identity are used, and a container
    /// without laps gets one synthesized from the session.
    pub fn from_messages(messages: &Messages) -> Result<Self, ParseError> {
        let Some((session, ignored)) = messages.sessions.split_first() else {
            return Err(ParseError::MissingMandatoryMessage(MessageKind::Session));
        };

        if !ignored.is_empty() {
            log::warn!("Ignoring {} session messages after the first.", ignored.len());
        }

        log::debug!(
            "Mapping {} laps, {} records, {} events, {} gases, {} tank summaries and {} tank updates.",
            messages.laps.len(),
            messages.records.len(),
            messages.events.len(),
            messages.dive_gases.len(),
            messages.tank_summaries.len(),
            messages.tank_updates.len(),
        );

        let session = Session::from_message(session);

        let summary = Summary::select(&messages.dive_summaries).map(|s| {
            log::debug!("Using dive summary referencing message {:?}.", s.reference_mesg);
            Summary::from_message(s, &session)
        });

        let timeline = messages.timeline();
        let samples = SamplePoint::from_messages(&messages.records, &timeline.records);

        let mut laps: Vec<_> = messages.laps.iter().map(Lap::from_message).collect();

        if laps.is_empty() {
            log::info!("Container holds no laps; synthesizing one from the session.");
            laps.push(Lap::synthesize(&session, &samples));
        }

        Ok(Self {
            summary,
            settings: messages.dive_settings.first().map(Settings::from_message),
            file_identity: messages.file_ids.first().map(FileIdentity::from_message),
            devices: messages.device_infos.iter().map(DeviceInfo::from_message).collect(),
            tank_summaries: messages.tank_summaries.iter().map(TankSummary::from_message).collect(),
            tank_updates: messages.tank_updates.iter().map(TankUpdate::from_message).collect(),
            alerts: Alert::from_messages(&messages.events, &timeline.events),
            gases: messages.dive_gases.iter().map(Gas::from_message).collect(),
            session,
            samples,
            laps,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    pub fn settings(&self) -> Option<&Settings> {
        self.settings.as_ref()
    }

    pub fn file_identity(&self) -> Option<&FileIdentity> {
        self.file_identity.as_ref()
    }

    pub fn devices(&self) -> &[DeviceInfo] {
        &self.devices
    }

    pub fn tank_summaries(&self) -> &[TankSummary] {
        &self.tank_summaries
    }

    pub fn tank_updates(&self) -> &[TankUpdate] {
        &self.tank_updates
    }

    pub fn samples(&self) -> &[SamplePoint] {
        &self.samples
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn gases(&self) -> &[Gas] {
        &self.gases
    }

    /// Laps in container order. Never empty.
    pub fn laps(&self) -> &[Lap] {
        &self.laps
    }
}

/// Initial state: a decoder waiting for a container.
#[derive(Debug)]
pub struct Assembler<D> {
    decoder: D,
}

impl<D: Decoder> Assembler<D> {
    pub fn new(decoder: D) -> Self {
        Self { decoder }
    }

    /// Transition to an extraction by decoding a container.
    pub fn decode(mut self, data: &[u8]) -> Result<Extraction, ParseError> {
        let mut messages = Messages::default();

        self.decoder
            .decode(data, &mut messages)
            .map_err(|err| ParseError::DecodeFailure(Box::new(err)))?;

        Ok(Extraction { messages })
    }

    /// Transition to an extraction by decoding a container read to its end.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn decode_reader(self, r: &mut impl std::io::Read) -> Result<Extraction, ParseError> {
        let mut data = Vec::new();
        r.read_to_end(&mut data)
            .map_err(|err| ParseError::DecodeFailure(Box::new(err)))?;

        self.decode(&data)
    }

    /// Transition to an extraction by decoding the container at a path.
    ///
    /// The file is read whole and closed before decoding starts, and on every
    /// failure.
    ///
    /// _Requires Cargo feature `std`._
    #[cfg(feature = "std")]
    pub fn decode_path(
        self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Extraction, ParseError> {
        use std::io::Read;

        let data = {
            let mut file = std::fs::File::open(path.as_ref())
                .map_err(|err| ParseError::DecodeFailure(Box::new(err)))?;

            let mut data = Vec::new();
            file.read_to_end(&mut data)
                .map_err(|err| ParseError::DecodeFailure(Box::new(err)))?;
            data
        };

        self.decode(&data)
    }
}

/// Decoded state: the raw messages of a container.
#[derive(Debug)]
pub struct Extraction {
    messages: Messages,
}

impl Extraction {
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Transition to the final state by mapping the messages into a report.
    pub fn extract(self) -> Result<DiveReport, ParseError> {
        DiveReport::from_messages(&self.messages)
    }
}

/// Assemble a dive report from a container slice.
pub fn parse_slice(data: &[u8], decoder: impl Decoder) -> Result<DiveReport, ParseError> {
    Assembler::new(decoder).decode(data)?.extract()
}

/// Assemble a dive report from a reader of a container.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn parse_reader(
    r: &mut impl std::io::Read,
    decoder: impl Decoder,
) -> Result<DiveReport, ParseError> {
    Assembler::new(decoder).decode_reader(r)?.extract()
}

/// Assemble a dive report from the container at a path.
///
/// _Requires Cargo feature `std`._
#[cfg(feature = "std")]
pub fn parse_path(
    path: impl AsRef<std::path::Path>,
    decoder: impl Decoder,
) -> Result<DiveReport, ParseError> {
    Assembler::new(decoder).decode_path(path)?.extract()
}
