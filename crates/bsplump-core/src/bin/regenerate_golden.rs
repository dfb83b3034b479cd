use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bsplump_core::report::decode_lump_file;
use bsplump_core::source::LumpWindow;
use bsplump_core::{DecodeOptions, EntityKind, MapType};
use serde::Deserialize;

#[derive(Deserialize)]
struct GoldenCase {
    kind: EntityKind,
    format: MapType,
    #[serde(default)]
    options: DecodeOptions,
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() || !path.join("input.bin").exists() {
            continue;
        }
        regenerate_one(&path)?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path) -> Result<(), String> {
    let case_path = dir.join("case.json");
    let case_json = fs::read_to_string(&case_path)
        .map_err(|err| format!("failed to read {}: {}", case_path.display(), err))?;
    let case: GoldenCase = serde_json::from_str(&case_json)
        .map_err(|err| format!("invalid {}: {}", case_path.display(), err))?;

    let input = dir.join("input.bin");
    let report = decode_lump_file(
        &input,
        case.kind,
        case.format,
        LumpWindow::WHOLE,
        &case.options,
    )
    .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    let output = dir.join("expected_report.json");
    fs::write(&output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
