//! Optional access to raw field values.
//!
//! A raw message field is an `Option<T>` filled in by the decoder. A field is
//! present only if the decoder published it and it does not hold the invalid
//! marker of its base type.

/// A primitive with an 'invalid' marker value.
pub trait Sentinel: Copy {
    /// Whether this value is the marker for a field that was not recorded.
    fn is_invalid(self) -> bool;
}

macro_rules! sentinel {
    ($($primitive:ty => $invalid:expr),+ $(,)?) => {
        $(
            impl Sentinel for $primitive {
                fn is_invalid(self) -> bool {
                    self == $invalid
                }
            }
        )+
    };
}

sentinel! {
    u8 => u8::MAX,
    u16 => u16::MAX,
    u32 => u32::MAX,
    u64 => u64::MAX,
    i8 => i8::MAX,
    i16 => i16::MAX,
    i32 => i32::MAX,
    i64 => i64::MAX,
}

impl Sentinel for f32 {
    fn is_invalid(self) -> bool {
        self.to_bits() == u32::MAX
    }
}

impl Sentinel for f64 {
    fn is_invalid(self) -> bool {
        self.to_bits() == u64::MAX
    }
}

/// Access to a raw field value.
pub trait Field<T> {
    /// The value, if it was recorded.
    fn valid(self) -> Option<T>;

    /// The value of a `z`-suffixed base type (such as `uint32z`), for which
    /// zero marks a field that was not recorded.
    fn valid_z(self) -> Option<T>;
}

impl<T: Sentinel + PartialEq + Default> Field<T> for Option<T> {
    fn valid(self) -> Option<T> {
        self.filter(|v| !v.is_invalid())
    }

    fn valid_z(self) -> Option<T> {
        self.filter(|v| *v != T::default())
    }
}

/// Decode a string field collected byte-by-byte.
///
/// Strings are null-terminated within their field; an empty or non-UTF-8
/// string is absent.
pub fn string(bytes: &[u8]) -> Option<&str> {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());

    match core::str::from_utf8(&bytes[..end]) {
        Ok(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}
