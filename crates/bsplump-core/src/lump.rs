//! Batch decoding of whole lumps.
//!
//! A lump is split into consecutive, non-overlapping windows of the record
//! length for its format. Element `i` of the result is decoded from bytes
//! `[i * len, (i + 1) * len)`. Leftover bytes shorter than one record are
//! dropped unless `TrailingBytes::Reject` is set.

use log::{debug, warn};
use rayon::prelude::*;

use crate::{DecodeError, DecodeOptions, EntityKind, MapType, RecordLayout, TrailingBytes};

/// A record kind with a fixed size per format.
pub trait LumpRecord: Sized + Send {
    const KIND: EntityKind;

    fn record_len(map_type: MapType) -> Result<usize, DecodeError>;

    fn layout(map_type: MapType) -> Result<&'static dyn RecordLayout, DecodeError>;

    fn decode(record: &[u8], map_type: MapType) -> Result<Self, DecodeError>;
}

/// Decodes every whole record of `T` in `data`, in file order.
///
/// # Examples
/// ```
/// use bsplump_core::{Brush, DecodeOptions, MapType, lump::decode_records};
///
/// let data = [1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 0xff];
/// let brushes: Vec<Brush> = decode_records(&data, MapType::Quake2, &DecodeOptions::default())?;
/// assert_eq!(brushes.len(), 1);
/// assert_eq!(brushes[0].contents(), 3);
/// # Ok::<(), bsplump_core::DecodeError>(())
/// ```
pub fn decode_records<T: LumpRecord>(
    data: &[u8],
    map_type: MapType,
    options: &DecodeOptions,
) -> Result<Vec<T>, DecodeError> {
    let record_len = T::record_len(map_type)?;
    let layout = T::layout(map_type)?;
    debug_assert!(
        layout.extent() <= record_len,
        "{} {map_type}: layout spans {} bytes of a {record_len}-byte record",
        T::KIND,
        layout.extent()
    );

    let records = data.len() / record_len;
    let trailing = data.len() % record_len;
    if trailing != 0 {
        match options.trailing {
            TrailingBytes::Reject => {
                return Err(DecodeError::TrailingBytes {
                    kind: T::KIND,
                    len: data.len(),
                    record_len,
                });
            }
            TrailingBytes::Ignore => warn!(
                "{} lump ({map_type}): ignoring {trailing} trailing bytes after {records} records",
                T::KIND
            ),
        }
    }

    let parallel = options.use_parallel(records);
    debug!(
        "decoding {records} {} records ({map_type}, {} layout, {record_len} bytes each, {})",
        T::KIND,
        layout.group(),
        if parallel { "parallel" } else { "sequential" }
    );

    let chunks = &data[..records * record_len];
    if parallel {
        chunks
            .par_chunks_exact(record_len)
            .map(|record| T::decode(record, map_type))
            .collect()
    } else {
        chunks
            .chunks_exact(record_len)
            .map(|record| T::decode(record, map_type))
            .collect()
    }
}

/// Number of whole `T` records and leftover bytes in a lump of `len` bytes.
pub fn record_count<T: LumpRecord>(
    len: usize,
    map_type: MapType,
) -> Result<(usize, usize), DecodeError> {
    let record_len = T::record_len(map_type)?;
    Ok((len / record_len, len % record_len))
}
