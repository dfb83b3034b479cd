use std::fs;
use std::path::{Path, PathBuf};

/// Filler for node bytes past the decoded header (bounds, face range, padding).
const NODE_FILLER: u8 = 0x11;

fn main() -> Result<(), String> {
    let root = PathBuf::from("tests/golden");
    write_brush_fixtures(&root)?;
    write_node_fixtures(&root)?;
    Ok(())
}

fn write_brush_fixtures(root: &Path) -> Result<(), String> {
    let mut quake2 = int_records(&[[0, 6, 1], [6, 4, 0], [10, 5, 0x20]]);
    quake2.extend_from_slice(&[0xaa, 0xbb, 0xcc]);
    write_input(root.join("brush_quake2"), &quake2)?;
    write_input(
        root.join("brush_nightfire"),
        &int_records(&[[1, 0, 6], [0, 6, 5]]),
    )?;
    write_input(root.join("brush_stef2"), &int_records(&[[6, 0, 2], [5, 6, 3]]))?;
    write_input(root.join("brush_cod"), &short_records(&[[6, 1], [4, 2]]))?;
    Ok(())
}

fn write_node_fixtures(root: &Path) -> Result<(), String> {
    let quake: Vec<u8> = [(0, 1, -1), (2, -2, -3)]
        .iter()
        .flat_map(|&(plane, child1, child2)| quake_node(plane, child1, child2))
        .collect();
    write_input(root.join("node_quake"), &quake)?;

    let vindictus: Vec<u8> = [(0, 1, -1), (1, -2, -3)]
        .iter()
        .flat_map(|&(plane, child1, child2)| wide_node(48, plane, child1, child2))
        .collect();
    write_input(root.join("node_vindictus"), &vindictus)?;
    Ok(())
}

fn int_records(records: &[[i32; 3]]) -> Vec<u8> {
    records
        .iter()
        .flatten()
        .flat_map(|value| value.to_le_bytes())
        .collect()
}

fn short_records(records: &[[i16; 2]]) -> Vec<u8> {
    records
        .iter()
        .flatten()
        .flat_map(|value| value.to_le_bytes())
        .collect()
}

fn quake_node(plane: i32, child1: i16, child2: i16) -> Vec<u8> {
    let mut record = vec![NODE_FILLER; 24];
    record[0..4].copy_from_slice(&plane.to_le_bytes());
    record[4..6].copy_from_slice(&child1.to_le_bytes());
    record[6..8].copy_from_slice(&child2.to_le_bytes());
    record
}

fn wide_node(record_len: usize, plane: i32, child1: i32, child2: i32) -> Vec<u8> {
    let mut record = vec![NODE_FILLER; record_len];
    record[0..4].copy_from_slice(&plane.to_le_bytes());
    record[4..8].copy_from_slice(&child1.to_le_bytes());
    record[8..12].copy_from_slice(&child2.to_le_bytes());
    record
}

fn write_input(dir: PathBuf, data: &[u8]) -> Result<(), String> {
    fs::create_dir_all(&dir)
        .map_err(|err| format!("failed to create {}: {}", dir.display(), err))?;
    let path = dir.join("input.bin");
    fs::write(&path, data).map_err(|err| format!("failed to write {}: {}", path.display(), err))
}
