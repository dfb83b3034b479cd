//! Brush records: a convex volume bounded by a contiguous run of sides.

pub mod layout;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::lump::LumpRecord;
use crate::{DecodeError, EntityKind, MapType};

pub use parser::parse_brush;

/// A decoded brush. Fields the format lacks read as `ABSENT` (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Brush {
    pub(crate) first_side: i32,
    pub(crate) num_sides: i32,
    pub(crate) texture: i32,
    pub(crate) contents: i32,
}

impl Brush {
    /// Decodes one brush record.
    ///
    /// # Examples
    /// ```
    /// use bsplump_core::{ABSENT, Brush, MapType};
    ///
    /// let brush = Brush::decode(&[7, 0, 9, 0], MapType::Cod)?;
    /// assert_eq!(brush.num_sides(), 7);
    /// assert_eq!(brush.texture(), 9);
    /// assert_eq!(brush.first_side(), ABSENT);
    /// # Ok::<(), bsplump_core::DecodeError>(())
    /// ```
    pub fn decode(record: &[u8], map_type: MapType) -> Result<Self, DecodeError> {
        parse_brush(record, map_type)
    }

    /// Index of the first brush side.
    pub fn first_side(&self) -> i32 {
        self.first_side
    }

    pub fn num_sides(&self) -> i32 {
        self.num_sides
    }

    /// Texture index (Quake 3 and CoD lineages).
    pub fn texture(&self) -> i32 {
        self.texture
    }

    /// Contents bitmask (Quake 2, Source and Nightfire lineages).
    pub fn contents(&self) -> i32 {
        self.contents
    }
}

impl LumpRecord for Brush {
    const KIND: EntityKind = EntityKind::Brush;

    fn record_len(map_type: MapType) -> Result<usize, DecodeError> {
        layout::RECORD_LENGTHS.lookup(map_type).copied()
    }

    fn layout(map_type: MapType) -> Result<&'static dyn crate::RecordLayout, DecodeError> {
        let layout = layout::LAYOUTS.lookup(map_type)?;
        Ok(layout)
    }

    fn decode(record: &[u8], map_type: MapType) -> Result<Self, DecodeError> {
        parse_brush(record, map_type)
    }
}
