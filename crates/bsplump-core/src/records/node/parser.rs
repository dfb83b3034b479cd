use super::Node;
use super::layout::{LAYOUTS, RECORD_LENGTHS};
use crate::records::common::RecordReader;
use crate::{DecodeError, MapType};

pub fn parse_node(record: &[u8], map_type: MapType) -> Result<Node, DecodeError> {
    let layout = LAYOUTS.lookup(map_type)?;
    let record_len = *RECORD_LENGTHS.lookup(map_type)?;
    log::trace!("node {map_type}: {} layout, {record_len}-byte record", layout.group);

    let reader = RecordReader::new(record);
    reader.require_len(record_len)?;

    Ok(Node {
        plane: reader.read_field(Some(layout.plane))?,
        child1: reader.read_field(Some(layout.child1))?,
        child2: reader.read_field(Some(layout.child2))?,
    })
}

#[cfg(test)]
mod tests {
    use super::parse_node;
    use crate::{DecodeError, EntityKind, MapType};

    #[test]
    fn parse_int32_children() {
        let mut record = vec![0u8; 32];
        record[..12].copy_from_slice(&[
            0x05, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x02,
        ]);
        let node = parse_node(&record, MapType::Source20).unwrap();
        assert_eq!(node.plane(), 5);
        assert_eq!(node.child1(), -1);
        assert_eq!(node.child2(), 0x0200_0000);
    }

    #[test]
    fn parse_quake_children_are_shorts() {
        let mut record = vec![0xaau8; 24];
        record[..8].copy_from_slice(&[0x03, 0x00, 0x00, 0x00, 0x02, 0x00, 0xfe, 0xff]);
        let node = parse_node(&record, MapType::Quake).unwrap();
        assert_eq!(node.plane(), 3);
        assert_eq!(node.child1(), 2);
        assert_eq!(node.child2(), -2);
    }

    #[test]
    fn parse_ignores_trailing_record_fields() {
        let mut record = vec![0x7fu8; 48];
        record[..12].copy_from_slice(&[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
        let node = parse_node(&record, MapType::Vindictus).unwrap();
        assert_eq!(node.children(), [2, 3]);
    }

    #[test]
    fn parse_zero_child_is_passed_through() {
        let node = parse_node(&[0u8; 28], MapType::Quake2).unwrap();
        assert_eq!(node.child1(), 0);
        assert_eq!(node.child2(), 0);
    }

    #[test]
    fn parse_short_record() {
        let err = parse_node(&[0u8; 12], MapType::Quake3).unwrap_err();
        assert_eq!(err, DecodeError::TooShort { needed: 36, actual: 12 });
    }

    #[test]
    fn parse_cod4_is_unsupported() {
        let err = parse_node(&[0u8; 36], MapType::Cod4).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedFormat {
                kind: EntityKind::Node,
                map_type: MapType::Cod4,
            }
        );
    }
}
