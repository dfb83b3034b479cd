use super::Brush;
use super::layout::{LAYOUTS, RECORD_LENGTHS};
use crate::records::common::RecordReader;
use crate::{DecodeError, MapType};

pub fn parse_brush(record: &[u8], map_type: MapType) -> Result<Brush, DecodeError> {
    let layout = LAYOUTS.lookup(map_type)?;
    let record_len = *RECORD_LENGTHS.lookup(map_type)?;
    log::trace!("brush {map_type}: {} layout, {record_len}-byte record", layout.group);

    let reader = RecordReader::new(record);
    reader.require_len(record_len)?;

    Ok(Brush {
        first_side: reader.read_field(layout.first_side)?,
        num_sides: reader.read_field(layout.num_sides)?,
        texture: reader.read_field(layout.texture)?,
        contents: reader.read_field(layout.contents)?,
    })
}
