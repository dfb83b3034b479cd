use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::{LumpFileSource, LumpSource, LumpWindow, SourceError};
use crate::{
    DecodeError, DecodeOptions, Entity, EntityKind, MapType, decode_lump_with_options, layout_for,
    record_len,
};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// Decoded lump with enough context to reproduce the decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpReport {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    pub input: InputInfo,
    pub kind: EntityKind,
    pub format: MapType,
    /// Name of the layout group `format` belongs to.
    pub layout_group: String,
    pub record_len: usize,
    pub records: usize,
    /// Bytes after the last whole record that were not decoded.
    pub trailing_bytes: usize,
    /// Entities in file order.
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the decoder.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
    /// Offset of the lump inside the input.
    pub lump_offset: u64,
    /// Lump size in bytes.
    pub lump_bytes: u64,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "bsplump".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Reads a lump from `path` (or a window of it) and decodes it.
///
/// # Examples
/// ```no_run
/// use std::path::Path;
///
/// use bsplump_core::report::decode_lump_file;
/// use bsplump_core::source::LumpWindow;
/// use bsplump_core::{DecodeOptions, EntityKind, MapType};
///
/// let report = decode_lump_file(
///     Path::new("brushes.lmp"),
///     EntityKind::Brush,
///     MapType::Quake2,
///     LumpWindow::WHOLE,
///     &DecodeOptions::default(),
/// )?;
/// println!("{} brushes", report.records);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn decode_lump_file(
    path: &Path,
    kind: EntityKind,
    map_type: MapType,
    window: LumpWindow,
    options: &DecodeOptions,
) -> Result<LumpReport, ReportError> {
    let source = LumpFileSource::open_window(path, window)?;
    decode_source(source, kind, map_type, options)
}

pub fn decode_source<S: LumpSource>(
    mut source: S,
    kind: EntityKind,
    map_type: MapType,
    options: &DecodeOptions,
) -> Result<LumpReport, ReportError> {
    // Unsupported formats fail before the input is read.
    let layout = layout_for(kind, map_type)?;
    let record_len = record_len(kind, map_type)?;

    let data = source.read_lump()?;
    let entities = decode_lump_with_options(kind, Some(&data), map_type, options)?;

    Ok(LumpReport {
        report_version: REPORT_VERSION,
        tool: ToolInfo::current(),
        input: InputInfo {
            path: source.describe(),
            bytes: source.input_len()?,
            lump_offset: source.lump_offset(),
            lump_bytes: data.len() as u64,
        },
        kind,
        format: map_type,
        layout_group: layout.group().to_string(),
        record_len,
        records: entities.len(),
        trailing_bytes: data.len() % record_len,
        entities,
    })
}
