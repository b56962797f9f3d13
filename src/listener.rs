//! Contract between a container decoder and the messages it publishes.
//!
//! Regulator does not read container bytes. A [`Decoder`] splits a container
//! into messages and publishes each one to the [`FromMessages`] receiver it is
//! handed, field by field, through [`FromMessage`]. Invalid field values are
//! expected to be skipped by the decoder; the accessors in [`crate::field`]
//! additionally reject the protocol's invalid sentinels.
//!
//! Both traits can be derived for structs of known shape. See the
//! [`FromMessages`](macro@FromMessages) and [`FromMessage`](macro@FromMessage)
//! macros.

use core::error::Error;

/// Derive [`FromMessages`] for a struct holding collections of messages.
///
/// Add the `message(N)` attribute to an `Option<T>` field, where `N` is the
/// global message number and `T` implements [`FromMessage`] and [`Default`].
/// Later instances of the same message replace earlier ones. To keep every
/// instance, in container order, use a `Vec<T>` instead.
///
/// Supply `order` in place of a message number, on a `Vec<u16>` field, to
/// record the global number of every collected message as it arrives.
///
/// ```
/// #[derive(Debug, Default, FromMessages)]
/// struct Activity {
///     #[message(0)]
///     file_id: Option<FileIdMessage>,
///     #[message(20)]
///     records: Vec<RecordMessage>,
///     #[message(order)]
///     order: Vec<u16>,
/// }
/// ```
pub use regulator_derive::FromMessages;

/// Produce message receivers for a container.
pub trait FromMessages {
    /// Retrieve a receiver for a new instance of a message, if one is wanted.
    fn add_message(&mut self, global: u16) -> Option<&mut dyn FromMessage>;
}

/// Derive [`FromMessage`] for a struct representing a single message.
///
/// Add the `field(N)` attribute to an `Option<T>` field, where `N` is the
/// field number and `T` the primitive the decoder publishes for it. Supply
/// `time` in place of a field number to receive the offset of a compressed
/// timestamp header.
///
/// ```
/// #[derive(Debug, Default, FromMessage)]
/// struct RecordMessage {
///     #[field(time)]
///     time_offset: Option<u8>,
///     #[field(92)]
///     depth: Option<u32>,
/// }
/// ```
///
/// Arrays (strings included) arrive one element at a time. Collect them with
/// an accumulator closure whose second parameter names the primitive.
///
/// ```
/// #[derive(Debug, Default, FromMessage)]
/// struct FileIdMessage {
///     #[field(8, |v, c: u8| v.push(c))]
///     product_name: Vec<u8>,
/// }
/// ```
pub use regulator_derive::FromMessage;

/// Receive field values for one message.
///
/// The default implementation of each method ignores received values.
#[allow(unused_variables)]
pub trait FromMessage {
    /// Add the compressed timestamp offset to the message.
    fn add_time_offset(&mut self, offset: u8) {}
    /// Add a `u8` for a field to the message.
    ///
    /// This receives fields of the base types `enum`, `string`, `byte` and
    /// `bool` as well.
    fn add_u8(&mut self, field: u8, value: u8) {}
    /// Add a `u16` for a field to the message.
    fn add_u16(&mut self, field: u8, value: u16) {}
    /// Add a `u32` for a field to the message.
    fn add_u32(&mut self, field: u8, value: u32) {}
    /// Add a `u64` for a field to the message.
    fn add_u64(&mut self, field: u8, value: u64) {}

    /// Add a `i8` for a field to the message.
    fn add_i8(&mut self, field: u8, value: i8) {}
    /// Add a `i16` for a field to the message.
    fn add_i16(&mut self, field: u8, value: i16) {}
    /// Add a `i32` for a field to the message.
    fn add_i32(&mut self, field: u8, value: i32) {}
    /// Add a `i64` for a field to the message.
    fn add_i64(&mut self, field: u8, value: i64) {}

    /// Add a `f32` for a field to the message.
    fn add_f32(&mut self, field: u8, value: f32) {}
    /// Add a `f64` for a field to the message.
    fn add_f64(&mut self, field: u8, value: f64) {}
}

/// A container decoder.
///
/// Implementations publish every message of `data` to `messages`, in
/// container order, and fail only when the container as a whole cannot be
/// read.
pub trait Decoder {
    /// Why a container could not be decoded.
    type Error: Error + Send + Sync + 'static;

    /// Decode a container, publishing its messages to a receiver.
    fn decode(&mut self, data: &[u8], messages: &mut dyn FromMessages)
    -> Result<(), Self::Error>;
}

impl<D: Decoder + ?Sized> Decoder for &mut D {
    type Error = D::Error;

    fn decode(
        &mut self,
        data: &[u8],
        messages: &mut dyn FromMessages,
    ) -> Result<(), Self::Error> {
        (**self).decode(data, messages)
    }
}
