//! Node record layouts.
//!
//! Only the child fields vary; the rest of each record (bounds, face range,
//! padding) is not decoded here, so the record lengths are grouped more finely
//! than the field layouts.

use crate::records::common::{Field, FormatTable, RecordLayout};
use crate::{EntityKind, MapType};

#[derive(Debug, PartialEq, Eq)]
pub struct NodeLayout {
    pub group: &'static str,
    pub plane: Field,
    pub child1: Field,
    pub child2: Field,
}

impl RecordLayout for NodeLayout {
    fn group(&self) -> &'static str {
        self.group
    }

    fn fields(&self) -> Vec<(&'static str, Option<Field>)> {
        vec![
            ("plane", Some(self.plane)),
            ("child1", Some(self.child1)),
            ("child2", Some(self.child2)),
        ]
    }
}

/// Plane index shared by every format.
const PLANE: Field = Field::i32(0);

pub const QUAKE: NodeLayout = NodeLayout {
    group: "quake",
    plane: PLANE,
    child1: Field::i16(4),
    child2: Field::i16(6),
};

pub const INT32_CHILDREN: NodeLayout = NodeLayout {
    group: "int32-children",
    plane: PLANE,
    child1: Field::i32(4),
    child2: Field::i32(8),
};

const QUAKE2_FORMATS: &[MapType] = &[
    MapType::Quake2,
    MapType::Sin,
    MapType::Sof,
    MapType::Daikatana,
];

const SOURCE_FORMATS: &[MapType] = &[
    MapType::Source17,
    MapType::Source18,
    MapType::Source19,
    MapType::Source20,
    MapType::Source21,
    MapType::Source22,
    MapType::Source23,
    MapType::Source27,
    MapType::TacticalIntervention,
    MapType::Dmomam,
];

const QUAKE3_FORMATS: &[MapType] = &[
    MapType::Quake3,
    MapType::Fakk,
    MapType::Cod,
    MapType::Stef2,
    MapType::Stef2Demo,
    MapType::Mohaa,
    MapType::Raven,
    MapType::Nightfire,
];

const INT32_CHILDREN_FORMATS: &[MapType] = &[
    MapType::Quake2,
    MapType::Sin,
    MapType::Sof,
    MapType::Daikatana,
    MapType::Source17,
    MapType::Source18,
    MapType::Source19,
    MapType::Source20,
    MapType::Source21,
    MapType::Source22,
    MapType::Source23,
    MapType::Source27,
    MapType::TacticalIntervention,
    MapType::Dmomam,
    MapType::Vindictus,
    MapType::Quake3,
    MapType::Fakk,
    MapType::Cod,
    MapType::Stef2,
    MapType::Stef2Demo,
    MapType::Mohaa,
    MapType::Raven,
    MapType::Nightfire,
];

pub static LAYOUTS: FormatTable<NodeLayout> = FormatTable::new(
    EntityKind::Node,
    &[
        (&[MapType::Quake], QUAKE),
        (INT32_CHILDREN_FORMATS, INT32_CHILDREN),
    ],
);

pub static RECORD_LENGTHS: FormatTable<usize> = FormatTable::new(
    EntityKind::Node,
    &[
        (&[MapType::Quake], 24),
        (QUAKE2_FORMATS, 28),
        (SOURCE_FORMATS, 32),
        (&[MapType::Vindictus], 48),
        (QUAKE3_FORMATS, 36),
    ],
);
