use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use log::debug;

use super::{LumpSource, LumpWindow, SourceError};

/// Reads one lump from a file, optionally from a window inside it.
pub struct LumpFileSource {
    path: PathBuf,
    file: File,
    input_len: u64,
    window: LumpWindow,
}

impl LumpFileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        Self::open_window(path, LumpWindow::WHOLE)
    }

    pub fn open_window(path: &Path, window: LumpWindow) -> Result<Self, SourceError> {
        let file = File::open(path)?;
        let input_len = file.metadata()?.len();
        let length = window
            .length
            .unwrap_or_else(|| input_len.saturating_sub(window.offset));
        let end = window.offset.checked_add(length);
        if window.offset > input_len || end.is_none_or(|end| end > input_len) {
            return Err(SourceError::OutOfRange {
                offset: window.offset,
                length,
                input_len,
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            file,
            input_len,
            window: LumpWindow::new(window.offset, Some(length)),
        })
    }

    pub fn window(&self) -> LumpWindow {
        self.window
    }
}

impl LumpSource for LumpFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn input_len(&self) -> Result<u64, SourceError> {
        Ok(self.input_len)
    }

    fn lump_offset(&self) -> u64 {
        self.window.offset
    }

    fn read_lump(&mut self) -> Result<Vec<u8>, SourceError> {
        let length = self.window.length.unwrap_or(0);
        debug!(
            "reading {length} lump bytes at offset {} from {}",
            self.window.offset,
            self.path.display()
        );
        self.file.seek(SeekFrom::Start(self.window.offset))?;
        let mut data = vec![0u8; length as usize];
        self.file.read_exact(&mut data)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn temp_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(bytes).expect("write temp file");
        file
    }

    #[test]
    fn reads_whole_file() {
        let file = temp_file(&[1, 2, 3, 4, 5]);
        let mut source = LumpFileSource::open(file.path()).unwrap();
        assert_eq!(source.read_lump().unwrap(), vec![1, 2, 3, 4, 5]);
        assert_eq!(source.input_len().unwrap(), 5);
    }

    #[test]
    fn reads_window() {
        let file = temp_file(&[1, 2, 3, 4, 5]);
        let mut source = LumpFileSource::open_window(file.path(), LumpWindow::new(1, Some(3)))
            .unwrap();
        assert_eq!(source.read_lump().unwrap(), vec![2, 3, 4]);
    }

    #[test]
    fn open_ended_window_runs_to_eof() {
        let file = temp_file(&[1, 2, 3, 4, 5]);
        let mut source = LumpFileSource::open_window(file.path(), LumpWindow::new(3, None))
            .unwrap();
        assert_eq!(source.window(), LumpWindow::new(3, Some(2)));
        assert_eq!(source.read_lump().unwrap(), vec![4, 5]);
    }

    #[test]
    fn window_past_eof_is_rejected() {
        let file = temp_file(&[0u8; 8]);
        let result = LumpFileSource::open_window(file.path(), LumpWindow::new(4, Some(8)));
        assert!(matches!(
            result,
            Err(SourceError::OutOfRange {
                offset: 4,
                length: 8,
                input_len: 8,
            })
        ));
        let result = LumpFileSource::open_window(file.path(), LumpWindow::new(9, None));
        assert!(matches!(result, Err(SourceError::OutOfRange { .. })));
    }
}
