mod file;

pub use file::LumpFileSource;

use thiserror::Error;

/// Byte range of a lump inside a larger file, as found by the container
/// reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LumpWindow {
    pub offset: u64,
    pub length: Option<u64>,
}

impl LumpWindow {
    /// The whole file.
    pub const WHOLE: LumpWindow = LumpWindow {
        offset: 0,
        length: None,
    };

    pub fn new(offset: u64, length: Option<u64>) -> Self {
        Self { offset, length }
    }
}

/// Supplier of raw lump bytes.
pub trait LumpSource {
    /// Human-readable origin used in reports.
    fn describe(&self) -> String;

    /// Total size of the underlying input in bytes.
    fn input_len(&self) -> Result<u64, SourceError>;

    /// Offset of the lump inside the input.
    fn lump_offset(&self) -> u64 {
        0
    }

    fn read_lump(&mut self) -> Result<Vec<u8>, SourceError>;
}

impl LumpSource for Vec<u8> {
    fn describe(&self) -> String {
        "<memory>".to_string()
    }

    fn input_len(&self) -> Result<u64, SourceError> {
        Ok(self.len() as u64)
    }

    fn read_lump(&mut self) -> Result<Vec<u8>, SourceError> {
        Ok(self.clone())
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("lump window {offset}+{length} exceeds input of {input_len} bytes")]
    OutOfRange {
        offset: u64,
        length: u64,
        input_len: u64,
    },
}
