//! BSP tree nodes.

pub mod layout;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::lump::LumpRecord;
use crate::{DecodeError, EntityKind, MapType};

pub use parser::parse_node;

/// A decoded node: a splitting plane and two children.
///
/// Negative children reference leaves. Zero would point back at the root
/// node and only shows up in malformed data; it is passed through as read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub(crate) plane: i32,
    pub(crate) child1: i32,
    pub(crate) child2: i32,
}

impl Node {
    pub fn decode(record: &[u8], map_type: MapType) -> Result<Self, DecodeError> {
        parse_node(record, map_type)
    }

    pub fn plane(&self) -> i32 {
        self.plane
    }

    pub fn child1(&self) -> i32 {
        self.child1
    }

    pub fn child2(&self) -> i32 {
        self.child2
    }

    pub fn children(&self) -> [i32; 2] {
        [self.child1, self.child2]
    }
}

impl LumpRecord for Node {
    const KIND: EntityKind = EntityKind::Node;

    fn record_len(map_type: MapType) -> Result<usize, DecodeError> {
        layout::RECORD_LENGTHS.lookup(map_type).copied()
    }

    fn layout(map_type: MapType) -> Result<&'static dyn crate::RecordLayout, DecodeError> {
        let layout = layout::LAYOUTS.lookup(map_type)?;
        Ok(layout)
    }

    fn decode(record: &[u8], map_type: MapType) -> Result<Self, DecodeError> {
        parse_node(record, map_type)
    }
}
