use super::layout::{Field, IntWidth};
use crate::{ABSENT, DecodeError};

/// Bounds-checked little-endian access to one record.
pub struct RecordReader<'a> {
    record: &'a [u8],
}

impl<'a> RecordReader<'a> {
    pub fn new(record: &'a [u8]) -> Self {
        Self { record }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.record.len() < needed {
            return Err(DecodeError::TooShort {
                needed,
                actual: self.record.len(),
            });
        }
        Ok(())
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.record.get(range.clone()).ok_or(DecodeError::TooShort {
            needed: range.end,
            actual: self.record.len(),
        })
    }

    /// Reads a field widened to `i32`, or `ABSENT` when the layout lacks it.
    pub fn read_field(&self, field: Option<Field>) -> Result<i32, DecodeError> {
        let Some(field) = field else {
            return Ok(ABSENT);
        };
        let bytes = self.read_slice(field.range())?;
        Ok(match field.width {
            IntWidth::I16 => i32::from(i16::from_le_bytes([bytes[0], bytes[1]])),
            IntWidth::I32 => i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }
}
