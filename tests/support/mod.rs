#![allow(dead_code)]

use csv::{ReaderBuilder, Trim};
use regulator::listener::{Decoder, FromMessage, FromMessages};
use thiserror::Error;

pub const DIVE: &str = "fixtures/dive.csv";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("malformed script row {0}")]
    Malformed(usize),
}

/// Replays a CSV script of messages through the listener.
///
/// Each row is a global message number followed by `field,type,value`
/// triples. The field `time` carries a compressed timestamp offset, and the
/// type `str` publishes its value byte by byte.
pub struct ScriptDecoder;

impl Decoder for ScriptDecoder {
    type Error = ScriptError;

    fn decode(&mut self, data: &[u8], messages: &mut dyn FromMessages) -> Result<(), ScriptError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(data);

        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let cells: Vec<&str> = record.iter().collect();

            let Some((global, fields)) = cells.split_first() else {
                continue;
            };

            let global: u16 = global.parse().map_err(|_| ScriptError::Malformed(row))?;

            if fields.len() % 3 != 0 {
                Err(ScriptError::Malformed(row))?
            }

            let mut message = messages.add_message(global);

            for triple in fields.chunks(3) {
                let [field, ty, value] = [triple[0], triple[1], triple[2]];

                let Some(message) = message.as_deref_mut() else {
                    continue;
                };

                publish(message, field, ty, value).ok_or(ScriptError::Malformed(row))?;
            }
        }

        Ok(())
    }
}

fn publish(message: &mut dyn FromMessage, field: &str, ty: &str, value: &str) -> Option<()> {
    if field == "time" {
        message.add_time_offset(value.parse().ok()?);
        return Some(());
    }

    let field: u8 = field.parse().ok()?;

    match ty {
        "u8" => message.add_u8(field, value.parse().ok()?),
        "u16" => message.add_u16(field, value.parse().ok()?),
        "u32" => message.add_u32(field, value.parse().ok()?),
        "u64" => message.add_u64(field, value.parse().ok()?),
        "i8" => message.add_i8(field, value.parse().ok()?),
        "i16" => message.add_i16(field, value.parse().ok()?),
        "i32" => message.add_i32(field, value.parse().ok()?),
        "i64" => message.add_i64(field, value.parse().ok()?),
        "f32" => message.add_f32(field, value.parse().ok()?),
        "f64" => message.add_f64(field, value.parse().ok()?),
        "str" => value.bytes().for_each(|b| message.add_u8(field, b)),
        _ => return None,
    }

    Some(())
}

/// Build a report from an inline script.
pub fn report(script: &str) -> Result<regulator::report::DiveReport, regulator::report::ParseError> {
    regulator::report::parse_slice(script.as_bytes(), ScriptDecoder)
}
