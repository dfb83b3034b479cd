//! Decoding of fixed-size BSP lump records.
//!
//! Map formats descended from Quake encode the same logical records (brushes,
//! tree nodes) with different field orders, widths and field sets. This crate
//! resolves the byte layout for a declared `MapType`, decodes single records,
//! and batch-decodes whole lumps into ordered collections.
//!
//! Record layouts live in `records::<kind>::layout` as static tables that group
//! formats sharing a layout; parsers read through a bounds-checked reader and
//! never index bytes directly. I/O is isolated in `source`, and `report` wraps a
//! decoded lump into a serializable report.
//!
//! Invariants:
//! - A decoded record depends only on its bytes and the map type.
//! - Fields a format lacks read as `ABSENT` (-1), never 0.
//! - Lump element `i` is the record at bytes `[i * len, (i + 1) * len)`.
//! - The record length table and the field layout table cover the same formats.
//!
//! # Examples
//! ```
//! use bsplump_core::{EntityKind, MapType, decode_lump};
//!
//! let data = [5, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0, 0, 0, 2]
//!     .into_iter()
//!     .chain([0u8; 24])
//!     .collect::<Vec<u8>>();
//! let nodes = decode_lump(EntityKind::Node, Some(&data), MapType::Quake3)?;
//! let node = nodes[0].as_node().unwrap();
//! assert_eq!(node.plane(), 5);
//! assert_eq!(node.children(), [-1, 0x0200_0000]);
//! # Ok::<(), bsplump_core::DecodeError>(())
//! ```

mod entity;
mod error;
pub mod lump;
mod map_type;
mod options;
pub mod records;
pub mod report;
pub mod source;

pub use entity::{Entity, EntityKind, ParseEntityKindError};
pub use error::DecodeError;
pub use map_type::{MapType, ParseMapTypeError};
pub use options::{DEFAULT_PARALLEL_THRESHOLD, DecodeOptions, TrailingBytes};
pub use records::{
    Brush, Field, IntWidth, Node, RecordLayout, layout_for, record_len, supported_map_types,
};

use lump::{LumpRecord, decode_records};

/// Value of a field the record's format does not store.
pub const ABSENT: i32 = -1;

/// Decodes a single `kind` record.
///
/// `None` stands for a buffer the caller could not supply, such as a lump the
/// container does not contain.
pub fn decode_entity(
    kind: EntityKind,
    bytes: Option<&[u8]>,
    map_type: MapType,
) -> Result<Entity, DecodeError> {
    let bytes = bytes.ok_or(DecodeError::MissingInput { kind })?;
    match kind {
        EntityKind::Brush => Brush::decode(bytes, map_type).map(Entity::from),
        EntityKind::Node => Node::decode(bytes, map_type).map(Entity::from),
    }
}

/// Decodes every whole `kind` record of a lump with default options.
pub fn decode_lump(
    kind: EntityKind,
    bytes: Option<&[u8]>,
    map_type: MapType,
) -> Result<Vec<Entity>, DecodeError> {
    decode_lump_with_options(kind, bytes, map_type, &DecodeOptions::default())
}

pub fn decode_lump_with_options(
    kind: EntityKind,
    bytes: Option<&[u8]>,
    map_type: MapType,
    options: &DecodeOptions,
) -> Result<Vec<Entity>, DecodeError> {
    let bytes = bytes.ok_or(DecodeError::MissingInput { kind })?;
    match kind {
        EntityKind::Brush => decode_as::<Brush>(bytes, map_type, options),
        EntityKind::Node => decode_as::<Node>(bytes, map_type, options),
    }
}

fn decode_as<T: LumpRecord + Into<Entity>>(
    bytes: &[u8],
    map_type: MapType,
    options: &DecodeOptions,
) -> Result<Vec<Entity>, DecodeError> {
    let records = decode_records::<T>(bytes, map_type, options)?;
    Ok(records.into_iter().map(Into::into).collect())
}
