use serde::{Deserialize, Serialize};

/// Policy for bytes left over after the last whole record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBytes {
    /// Drop them, as the map loaders in every supported engine do.
    #[default]
    Ignore,
    /// Fail with `DecodeError::TrailingBytes`.
    Reject,
}

/// Default record count at which lumps are decoded on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Lump decoding options.
///
/// # Examples
/// ```
/// use bsplump_core::{DecodeOptions, TrailingBytes};
///
/// let options = DecodeOptions::strict().with_parallel_threshold(None);
/// assert_eq!(options.trailing, TrailingBytes::Reject);
/// assert!(options.parallel_threshold.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub trailing: TrailingBytes,
    /// Minimum record count for parallel decoding; `None` keeps it sequential.
    pub parallel_threshold: Option<usize>,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            trailing: TrailingBytes::Ignore,
            parallel_threshold: Some(DEFAULT_PARALLEL_THRESHOLD),
        }
    }
}

impl DecodeOptions {
    /// Defaults, but a lump length that is not a whole number of records is
    /// an error.
    pub fn strict() -> Self {
        Self {
            trailing: TrailingBytes::Reject,
            ..Self::default()
        }
    }

    pub fn with_trailing(mut self, trailing: TrailingBytes) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: Option<usize>) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub(crate) fn use_parallel(&self, records: usize) -> bool {
        self.parallel_threshold
            .is_some_and(|threshold| records >= threshold.max(1))
    }
}
