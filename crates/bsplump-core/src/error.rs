use thiserror::Error;

use crate::{EntityKind, MapType};

/// Errors returned by record and lump decoding.
///
/// # Examples
/// ```
/// use bsplump_core::{DecodeError, EntityKind, MapType};
///
/// let err = DecodeError::UnsupportedFormat {
///     kind: EntityKind::Brush,
///     map_type: MapType::Quake,
/// };
/// assert!(err.to_string().contains("quake"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing input: no {kind} bytes supplied")]
    MissingInput { kind: EntityKind },
    #[error("map type {map_type} isn't supported by the {kind} decoder")]
    UnsupportedFormat { kind: EntityKind, map_type: MapType },
    #[error("record too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
    #[error("{kind} lump length {len} is not a multiple of the {record_len}-byte record")]
    TrailingBytes {
        kind: EntityKind,
        len: usize,
        record_len: usize,
    },
}
