use bsplump_core::{
    ABSENT, DecodeError, Entity, EntityKind, MapType, decode_entity, decode_lump, layout_for,
    record_len, supported_map_types,
};

fn supported_pairs() -> Vec<(EntityKind, MapType)> {
    EntityKind::ALL
        .into_iter()
        .flat_map(|kind| {
            supported_map_types(kind)
                .into_iter()
                .map(move |map_type| (kind, map_type))
        })
        .collect()
}

fn fields(entity: &Entity) -> Vec<(&'static str, i32)> {
    match entity {
        Entity::Brush(brush) => vec![
            ("first_side", brush.first_side()),
            ("num_sides", brush.num_sides()),
            ("texture", brush.texture()),
            ("contents", brush.contents()),
        ],
        Entity::Node(node) => vec![
            ("plane", node.plane()),
            ("child1", node.child1()),
            ("child2", node.child2()),
        ],
    }
}

/// Deterministic non-zero bytes so field order mistakes show up.
fn patterned(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(37).wrapping_add(seed) | 1)
        .collect()
}

#[test]
fn zeroed_record_reads_zero_or_absent() {
    for (kind, map_type) in supported_pairs() {
        let len = record_len(kind, map_type).unwrap();
        let layout = layout_for(kind, map_type).unwrap();
        let entity = decode_entity(kind, Some(&vec![0u8; len]), map_type).unwrap();

        for ((name, value), (layout_name, field)) in fields(&entity).into_iter().zip(layout.fields())
        {
            assert_eq!(name, layout_name);
            let expected = if field.is_some() { 0 } else { ABSENT };
            assert_eq!(value, expected, "{kind} {map_type} {name}");
        }
    }
}

#[test]
fn lump_length_is_floor_of_records() {
    for (kind, map_type) in supported_pairs() {
        let len = record_len(kind, map_type).unwrap();
        for buffer_len in [0, 1, len - 1, len, len + 1, 3 * len, 3 * len + len / 2] {
            let data = vec![0u8; buffer_len];
            let lump = decode_lump(kind, Some(&data), map_type).unwrap();
            assert_eq!(lump.len(), buffer_len / len, "{kind} {map_type} {buffer_len}");
        }
    }
}

#[test]
fn lump_element_matches_single_decode() {
    for (kind, map_type) in supported_pairs() {
        let len = record_len(kind, map_type).unwrap();
        let data = patterned(4 * len + 1, map_type as u8);
        let lump = decode_lump(kind, Some(&data), map_type).unwrap();
        assert_eq!(lump.len(), 4);
        for (i, entity) in lump.iter().enumerate() {
            let record = &data[i * len..(i + 1) * len];
            let single = decode_entity(kind, Some(record), map_type).unwrap();
            assert_eq!(*entity, single, "{kind} {map_type} record {i}");
        }
    }
}

#[test]
fn missing_input_for_every_pair() {
    for kind in EntityKind::ALL {
        for map_type in MapType::ALL {
            assert_eq!(
                decode_entity(kind, None, map_type),
                Err(DecodeError::MissingInput { kind })
            );
            assert_eq!(
                decode_lump(kind, None, map_type),
                Err(DecodeError::MissingInput { kind })
            );
        }
    }
}

#[test]
fn unsupported_pairs_fail() {
    let bytes = [0u8; 64];
    for (kind, map_type) in [
        (EntityKind::Brush, MapType::Quake),
        (EntityKind::Node, MapType::Cod2),
        (EntityKind::Node, MapType::Cod4),
    ] {
        let expected = DecodeError::UnsupportedFormat { kind, map_type };
        assert_eq!(decode_entity(kind, Some(&bytes), map_type), Err(expected.clone()));
        assert_eq!(decode_lump(kind, Some(&bytes), map_type), Err(expected));
        let err = layout_for(kind, map_type).err().expect("unsupported layout");
        assert!(err.to_string().contains(map_type.name()));
    }
}

#[test]
fn quake2_brush_example() {
    let bytes = [1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0];
    let entity = decode_entity(EntityKind::Brush, Some(&bytes), MapType::Quake2).unwrap();
    let brush = entity.as_brush().unwrap();
    assert_eq!(brush.first_side(), 1);
    assert_eq!(brush.num_sides(), 2);
    assert_eq!(brush.texture(), -1);
    assert_eq!(brush.contents(), 3);
}

#[test]
fn int32_children_node_example() {
    let mut bytes = vec![0x05, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x02];
    bytes.resize(record_len(EntityKind::Node, MapType::Sof).unwrap(), 0);
    let entity = decode_entity(EntityKind::Node, Some(&bytes), MapType::Sof).unwrap();
    let node = entity.as_node().unwrap();
    assert_eq!(node.plane(), 5);
    assert_eq!(node.child1(), -1);
    assert_eq!(node.child2(), 33_554_432);
}

#[test]
fn cod_brush_example() {
    let bytes = [0x07, 0x00, 0x09, 0x00];
    let entity = decode_entity(EntityKind::Brush, Some(&bytes), MapType::Cod).unwrap();
    let brush = entity.as_brush().unwrap();
    assert_eq!(brush.first_side(), -1);
    assert_eq!(brush.num_sides(), 7);
    assert_eq!(brush.texture(), 9);
    assert_eq!(brush.contents(), -1);
}

#[test]
fn reordered_groups_stay_distinct() {
    let bytes: Vec<u8> = [1i32, 2, 3].iter().flat_map(|v| v.to_le_bytes()).collect();
    let decode = |map_type| {
        *decode_entity(EntityKind::Brush, Some(&bytes), map_type)
            .unwrap()
            .as_brush()
            .unwrap()
    };

    let quake2 = decode(MapType::Source27);
    let nightfire = decode(MapType::Nightfire);
    let quake3 = decode(MapType::Mohaa);
    let stef2 = decode(MapType::Stef2);

    assert_eq!((quake2.first_side(), quake2.num_sides(), quake2.contents()), (1, 2, 3));
    assert_eq!((nightfire.contents(), nightfire.first_side(), nightfire.num_sides()), (1, 2, 3));
    assert_eq!((quake3.first_side(), quake3.num_sides(), quake3.texture()), (1, 2, 3));
    assert_eq!((stef2.num_sides(), stef2.first_side(), stef2.texture()), (1, 2, 3));
}
