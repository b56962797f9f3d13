//! Closed vocabularies for categorical fields.
//!
//! Each vocabulary is a static table from protocol codes to variants. Decoding
//! is total: a code outside the table decodes to [`Decoded::Unrecognized`],
//! keeping the code so callers can tell it apart from any known value.

use core::{fmt, hash::Hash};

/// A static table of known codes for one categorical field.
pub trait Vocabulary: Copy + Sized + 'static {
    /// The raw code type of the field.
    type Code: Copy + fmt::Debug + fmt::Display + PartialEq + Eq + Hash;

    /// The variant for a code, if the table knows it.
    fn lookup(code: Self::Code) -> Option<Self>;

    /// The code of a variant.
    fn code(self) -> Self::Code;

    /// A human-readable name.
    fn label(self) -> &'static str;

    /// Decode a code, falling back to [`Decoded::Unrecognized`].
    fn decode(code: Self::Code) -> Decoded<Self> {
        match Self::lookup(code) {
            Some(known) => Decoded::Known(known),
            None => Decoded::Unrecognized(code),
        }
    }
}

/// A decoded categorical value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoded<T: Vocabulary> {
    /// A code present in the table.
    Known(T),
    /// A code absent from the table, preserved as received.
    Unrecognized(T::Code),
}

impl<T: Vocabulary> Decoded<T> {
    /// The known variant, if any.
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(known) => Some(known),
            Self::Unrecognized(_) => None,
        }
    }

    /// The raw code, whether or not it is known.
    pub fn code(self) -> T::Code {
        match self {
            Self::Known(known) => known.code(),
            Self::Unrecognized(code) => code,
        }
    }
}

impl<T: Vocabulary> fmt::Display for Decoded<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(known) => f.write_str(known.label()),
            Self::Unrecognized(code) => write!(f, "Unknown ({code})"),
        }
    }
}

/// Declare a vocabulary: a fieldless enum with explicit codes and labels.
///
/// Codes are checked by reinterpreting the raw integer as the enum, so the
/// table is exactly the set of declared discriminants.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident: $repr:ident {
            $($variant:ident = $code:literal => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ::zerocopy::TryFromBytes)]
        $vis enum $name {
            $($variant = $code,)+
        }

        impl $crate::category::Vocabulary for $name {
            type Code = $repr;

            fn lookup(code: $repr) -> Option<Self> {
                let known: Result<Self, _> = ::zerocopy::try_transmute!(code);
                known.ok()
            }

            fn code(self) -> $repr {
                self as $repr
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($crate::category::Vocabulary::label(*self))
            }
        }
    };
}

mod activity;
mod device;
mod dive;
mod event;

pub use activity::{Sport, SubSport};
pub use device::{BatteryStatus, FileKind, Manufacturer};
pub use dive::{GasMode, GasStatus, WaterType};
pub use event::{DiveAlert, Event, EventType, TimerTrigger};
