//! Fixed-size lump records.
//!
//! Each record kind follows the same layered structure:
//! - `layout`: layout descriptors and record lengths per format group
//!   (source of truth)
//! - `parser`: record decoding through `common::RecordReader`
//!   (no direct byte indexing)
//!
//! The functions here dispatch on `EntityKind` for callers that only know the
//! kind at runtime.

pub mod brush;
pub(crate) mod common;
pub mod node;

pub use brush::Brush;
pub use common::{Field, IntWidth, RecordLayout};
pub use node::Node;

use crate::lump::LumpRecord;
use crate::{DecodeError, EntityKind, MapType};

/// Layout descriptor for `kind` under `map_type`.
///
/// Formats in the same group return the same descriptor instance.
///
/// # Examples
/// ```
/// use bsplump_core::{EntityKind, MapType, layout_for};
///
/// let layout = layout_for(EntityKind::Brush, MapType::Source20)?;
/// assert_eq!(layout.group(), "quake2");
/// # Ok::<(), bsplump_core::DecodeError>(())
/// ```
pub fn layout_for(
    kind: EntityKind,
    map_type: MapType,
) -> Result<&'static dyn RecordLayout, DecodeError> {
    match kind {
        EntityKind::Brush => Brush::layout(map_type),
        EntityKind::Node => Node::layout(map_type),
    }
}

/// Size in bytes of one `kind` record under `map_type`.
pub fn record_len(kind: EntityKind, map_type: MapType) -> Result<usize, DecodeError> {
    match kind {
        EntityKind::Brush => Brush::record_len(map_type),
        EntityKind::Node => Node::record_len(map_type),
    }
}

/// Formats `kind` can be decoded from, in declaration order.
pub fn supported_map_types(kind: EntityKind) -> Vec<MapType> {
    match kind {
        EntityKind::Brush => brush::layout::LAYOUTS.supported().collect(),
        EntityKind::Node => node::layout::LAYOUTS.supported().collect(),
    }
}
