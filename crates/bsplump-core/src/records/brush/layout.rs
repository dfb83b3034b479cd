//! Brush record layouts, grouped by format.
//!
//! The field table and the record length table are kept apart. Both must
//! cover the same formats and every layout must fit its record.

use crate::records::common::{Field, FormatTable, RecordLayout};
use crate::{EntityKind, MapType};

#[derive(Debug, PartialEq, Eq)]
pub struct BrushLayout {
    pub group: &'static str,
    pub first_side: Option<Field>,
    pub num_sides: Option<Field>,
    pub texture: Option<Field>,
    pub contents: Option<Field>,
}

impl RecordLayout for BrushLayout {
    fn group(&self) -> &'static str {
        self.group
    }

    fn fields(&self) -> Vec<(&'static str, Option<Field>)> {
        vec![
            ("first_side", self.first_side),
            ("num_sides", self.num_sides),
            ("texture", self.texture),
            ("contents", self.contents),
        ]
    }
}

pub const QUAKE2: BrushLayout = BrushLayout {
    group: "quake2",
    first_side: Some(Field::i32(0)),
    num_sides: Some(Field::i32(4)),
    texture: None,
    contents: Some(Field::i32(8)),
};

pub const NIGHTFIRE: BrushLayout = BrushLayout {
    group: "nightfire",
    first_side: Some(Field::i32(4)),
    num_sides: Some(Field::i32(8)),
    texture: None,
    contents: Some(Field::i32(0)),
};

pub const QUAKE3: BrushLayout = BrushLayout {
    group: "quake3",
    first_side: Some(Field::i32(0)),
    num_sides: Some(Field::i32(4)),
    texture: Some(Field::i32(8)),
    contents: None,
};

pub const STEF2: BrushLayout = BrushLayout {
    group: "stef2",
    first_side: Some(Field::i32(4)),
    num_sides: Some(Field::i32(0)),
    texture: Some(Field::i32(8)),
    contents: None,
};

pub const COD: BrushLayout = BrushLayout {
    group: "cod",
    first_side: None,
    num_sides: Some(Field::i16(0)),
    texture: Some(Field::i16(2)),
    contents: None,
};

const QUAKE2_FORMATS: &[MapType] = &[
    MapType::Quake2,
    MapType::Daikatana,
    MapType::Sin,
    MapType::Sof,
    MapType::Source17,
    MapType::Source18,
    MapType::Source19,
    MapType::Source20,
    MapType::Source21,
    MapType::Source22,
    MapType::Source23,
    MapType::Source27,
    MapType::Vindictus,
    MapType::TacticalIntervention,
    MapType::Dmomam,
];

const QUAKE3_FORMATS: &[MapType] = &[
    MapType::Mohaa,
    MapType::Stef2Demo,
    MapType::Raven,
    MapType::Quake3,
    MapType::Fakk,
];

const COD_FORMATS: &[MapType] = &[MapType::Cod, MapType::Cod2, MapType::Cod4];

pub static LAYOUTS: FormatTable<BrushLayout> = FormatTable::new(
    EntityKind::Brush,
    &[
        (QUAKE2_FORMATS, QUAKE2),
        (&[MapType::Nightfire], NIGHTFIRE),
        (QUAKE3_FORMATS, QUAKE3),
        (&[MapType::Stef2], STEF2),
        (COD_FORMATS, COD),
    ],
);

pub static RECORD_LENGTHS: FormatTable<usize> = FormatTable::new(
    EntityKind::Brush,
    &[
        (QUAKE2_FORMATS, 12),
        (&[MapType::Nightfire, MapType::Stef2], 12),
        (QUAKE3_FORMATS, 12),
        (COD_FORMATS, 4),
    ],
);
