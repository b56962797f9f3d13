//! A [`Decoder`] for FIT containers, backed by `derailleur`.
//!
//! `derailleur` publishes records through its own listener traits. The
//! [`FitDecoder`] relays each record, field by field and in container order,
//! to the message receivers of this crate.
//!
//! _Requires Cargo feature `derailleur`._

use alloc::vec::Vec;

use derailleur::avec::{FromRecord, FromRecords};

use crate::listener::{Decoder, FromMessage, FromMessages};

/// Decodes FIT containers held in memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct FitDecoder;

impl Decoder for FitDecoder {
    type Error = derailleur::avec::slice::Error;

    fn decode(
        &mut self,
        data: &[u8],
        messages: &mut dyn FromMessages,
    ) -> Result<(), Self::Error> {
        let mut relay = Relay::new(messages);
        derailleur::avec::decode_slice(data, &mut relay)?;
        relay.finish();

        Ok(())
    }
}

/// A field value held until its record is complete.
#[derive(Clone, Copy, Debug)]
enum Value {
    TimeOffset(u8),
    U8(u8, u8),
    U16(u8, u16),
    U32(u8, u32),
    U64(u8, u64),
    I8(u8, i8),
    I16(u8, i16),
    I32(u8, i32),
    I64(u8, i64),
    F32(u8, f32),
    F64(u8, f64),
}

impl Value {
    fn publish(self, m: &mut dyn FromMessage) {
        match self {
            Self::TimeOffset(offset) => m.add_time_offset(offset),
            Self::U8(field, value) => m.add_u8(field, value),
            Self::U16(field, value) => m.add_u16(field, value),
            Self::U32(field, value) => m.add_u32(field, value),
            Self::U64(field, value) => m.add_u64(field, value),
            Self::I8(field, value) => m.add_i8(field, value),
            Self::I16(field, value) => m.add_i16(field, value),
            Self::I32(field, value) => m.add_i32(field, value),
            Self::I64(field, value) => m.add_i64(field, value),
            Self::F32(field, value) => m.add_f32(field, value),
            Self::F64(field, value) => m.add_f64(field, value),
        }
    }
}

/// Buffers the fields of the current record, and hands them to a message
/// receiver once the next record begins.
///
/// A receiver borrows the message collection, so it cannot be held across
/// calls from the decoder.
struct Relay<'a> {
    messages: &'a mut dyn FromMessages,
    global: Option<u16>,
    values: Vec<Value>,
}

impl<'a> Relay<'a> {
    fn new(messages: &'a mut dyn FromMessages) -> Self {
        Self {
            messages,
            global: None,
            values: Vec::new(),
        }
    }

    fn flush(&mut self) {
        let Some(global) = self.global.take() else {
            return;
        };

        if let Some(message) = self.messages.add_message(global) {
            for value in self.values.drain(..) {
                value.publish(message);
            }
        }

        self.values.clear();
    }

    fn finish(mut self) {
        self.flush();
    }

    fn push(&mut self, value: Value) {
        self.values.push(value);
    }
}

impl FromRecords for Relay<'_> {
    fn add_record(&mut self, id: u16) -> Option<&mut dyn FromRecord> {
        self.flush();
        self.global = Some(id);
        Some(self)
    }
}

impl FromRecord for Relay<'_> {
    fn add_time_offset(&mut self, offset: u8) {
        self.push(Value::TimeOffset(offset));
    }
    fn add_u8(&mut self, field: u8, value: u8) {
        self.push(Value::U8(field, value));
    }
    fn add_u16(&mut self, field: u8, value: u16) {
        self.push(Value::U16(field, value));
    }
    fn add_u32(&mut self, field: u8, value: u32) {
        self.push(Value::U32(field, value));
    }
    fn add_u64(&mut self, field: u8, value: u64) {
        self.push(Value::U64(field, value));
    }
    fn add_i8(&mut self, field: u8, value: i8) {
        self.push(Value::I8(field, value));
    }
    fn add_i16(&mut self, field: u8, value: i16) {
        self.push(Value::I16(field, value));
    }
    fn add_i32(&mut self, field: u8, value: i32) {
        self.push(Value::I32(field, value));
    }
    fn add_i64(&mut self, field: u8, value: i64) {
        self.push(Value::I64(field, value));
    }
    fn add_f32(&mut self, field: u8, value: f32) {
        self.push(Value::F32(field, value));
    }
    fn add_f64(&mut self, field: u8, value: f64) {
        self.push(Value::F64(field, value));
    }
}
