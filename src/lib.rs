#![no_std]

//! Normalizes the messages of a dive computer's FIT container into a
//! strongly-typed dive report.
//!
//! Regulator does not decode container bytes. A [`listener::Decoder`]
//! publishes each message it finds to the receivers in [`message`]; the
//! [`report`] module maps those raw values into physical units and closed
//! vocabularies, and assembles them into a [`report::DiveReport`].
//!
//! Every field the container may omit is an `Option`, and is never filled in
//! with a default. A report fails to assemble only when the container cannot
//! be decoded or holds no session.
//!
//! Most users should begin with [`report::parse_path`] or
//! [`report::parse_slice`], handing them a [`fit::FitDecoder`] or another
//! decoder.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable path- and reader-based assembly (default).
//! - `chrono`: enable conversion of timestamps to `chrono` date-times.
//! - `derailleur`: enable [`fit::FitDecoder`], decoding FIT containers with
//!   `derailleur`.

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

// Lets the derive macros name this crate as `::regulator` from within.
extern crate self as regulator;

pub mod category;
pub mod field;
#[cfg(feature = "derailleur")]
pub mod fit;
pub mod listener;
pub mod message;
pub mod report;
pub mod units;
