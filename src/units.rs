//! Conversions from raw encoded values to physical units.
//!
//! Every function here is pure and total over its input type. Values are
//! converted once, when a message is mapped; only [`format_duration`] rounds.

use alloc::{format, string::String};

/// Degrees per semicircle, `180 / 2^31`.
pub const DEGREES_PER_SEMICIRCLE: f64 = 180.0 / 2_147_483_648.0;

/// Seconds between the Unix epoch and the FIT epoch, 1989-12-31T00:00:00Z.
pub const FIT_EPOCH_OFFSET: i64 = 631_065_600;

/// Convert a semicircle-encoded angle to degrees.
pub fn degrees(semicircles: i32) -> f64 {
    semicircles as f64 * DEGREES_PER_SEMICIRCLE
}

/// Convert degrees back to (unrounded) semicircles.
pub fn semicircles(degrees: f64) -> f64 {
    degrees / DEGREES_PER_SEMICIRCLE
}

/// A geographic position in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    /// A position from valid semicircle coordinates. Both must be present.
    pub fn from_semicircles(latitude: Option<i32>, longitude: Option<i32>) -> Option<Self> {
        Some(Self {
            latitude: degrees(latitude?),
            longitude: degrees(longitude?),
        })
    }
}

/// Seconds, from a field scaled by 1000.
pub fn seconds(millis: u32) -> f64 {
    millis as f64 / 1000.0
}

/// Meters, from a depth field scaled by 1000.
pub fn depth(millimeters: u32) -> f64 {
    millimeters as f64 / 1000.0
}

/// Meters, from a distance field scaled by 100.
pub fn distance(centimeters: u32) -> f64 {
    centimeters as f64 / 100.0
}

/// Kilometers per hour, from a speed in millimeters per second.
pub fn speed(millimeters_per_second: u32) -> f64 {
    millimeters_per_second as f64 / 1000.0 * 3.6
}

/// Kilometers per hour, from a signed vertical speed in millimeters per
/// second.
pub fn vertical_speed(millimeters_per_second: i16) -> f64 {
    millimeters_per_second as f64 / 1000.0 * 3.6
}

/// Meters, from an altitude field scaled by 5 and offset by 500.
pub fn altitude(raw: u32) -> f64 {
    raw as f64 / 5.0 - 500.0
}

/// Degrees Celsius.
pub fn celsius(raw: i8) -> f64 {
    raw as f64
}

/// Bar, from a tank pressure in centibar.
pub fn pressure(centibar: u16) -> f64 {
    centibar as f64 / 100.0
}

/// Bar, from an absolute pressure in Pascal.
pub fn absolute_pressure(pascal: u32) -> f64 {
    pascal as f64 / 100_000.0
}

/// Bar, from an oxygen partial pressure threshold scaled by 100.
pub fn partial_pressure(raw: u8) -> f64 {
    raw as f64 / 100.0
}

/// Liters, from a gas volume scaled by 100.
pub fn volume(raw: u32) -> f64 {
    raw as f64 / 100.0
}

/// Volts, from a battery voltage scaled by 256.
pub fn voltage(raw: u16) -> f64 {
    raw as f64 / 256.0
}

/// A software version scaled by 100, such as `2.31`.
pub fn version(raw: u16) -> f64 {
    raw as f64 / 100.0
}

/// Format whole seconds as `HH:MM:SS`.
///
/// Hours are not wrapped, so durations of 100 hours or more widen the first
/// component.
pub fn format_duration(seconds: u32) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format fractional seconds as `HH:MM:SS`, truncating the fraction.
pub fn format_seconds(seconds: f64) -> String {
    // Saturating float conversion: negative and NaN become zero.
    format_duration(seconds as u32)
}

/// A point in time, in seconds since the FIT epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub u32);

impl Timestamp {
    /// Seconds since the Unix epoch.
    pub fn unix(self) -> i64 {
        self.0 as i64 + FIT_EPOCH_OFFSET
    }

    /// The timestamp as a UTC date and time.
    ///
    /// _Requires Cargo feature `chrono`._
    #[cfg(feature = "chrono")]
    pub fn to_utc(self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.unix(), 0)
    }
}

/// Resolves compressed timestamp offsets against the last full timestamp
/// seen in a sequence of messages.
#[derive(Debug, Default)]
pub struct TimestampResolver {
    last: Option<u32>,
}

impl TimestampResolver {
    /// Resolve the timestamp of the next message in the sequence.
    ///
    /// A full timestamp wins and becomes the new reference. Otherwise a 5-bit
    /// offset rolls the reference forward; without a reference it cannot be
    /// resolved.
    pub fn resolve(&mut self, timestamp: Option<u32>, offset: Option<u8>) -> Option<Timestamp> {
        let resolved = match (timestamp, offset, self.last) {
            (Some(t), _, _) => t,
            (None, Some(offset), Some(last)) => {
                last.wrapping_add((offset as u32).wrapping_sub(last) & 0x1F)
            }
            _ => return None,
        };

        self.last = Some(resolved);
        Some(Timestamp(resolved))
    }
}
