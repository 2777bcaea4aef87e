//! Error types for corpus loading

use std::path::PathBuf;

use thiserror::Error;

use crate::config::Field;
use tts_corpus_text::TextError;

/// Errors raised while loading a corpus or serving examples
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Metadata index or per-example feature file is missing
    #[error("resource not found: {path}")]
    ResourceNotFound { path: PathBuf },

    /// A metadata line is not `<file_identifier><TAB><text>`
    #[error("metadata line {line}: expected 2 tab-separated fields, found {found}")]
    MalformedRecord { line: usize, found: usize },

    /// A feature file exists but could not be read as a 2-D array
    #[error("failed to read feature file {path}: {source}")]
    FeatureRead {
        path: PathBuf,
        source: ndarray_npy::ReadNpyError,
    },

    /// A gate field was requested without its source feature field
    #[error("field `{gate}` requires field `{feature}` to be requested as well")]
    GateWithoutFeature { gate: Field, feature: Field },

    /// `get` index past the end of the (possibly sliced) index
    #[error("example index {index} out of bounds for dataset of {len} examples")]
    IndexOutOfBounds { index: usize, len: usize },

    /// `slice` bounds do not describe a `[start, end)` range of the index
    #[error("invalid slice {start}..{end} for dataset of {len} examples")]
    InvalidSlice {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Configuration could not be loaded or deserialized
    #[error("failed to load dataset config: {0}")]
    Config(String),

    /// I/O failure other than a missing resource
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Text-level failure (out-of-vocabulary symbol reaching the encoder)
    #[error(transparent)]
    Text(#[from] TextError),
}

impl From<config::ConfigError> for DatasetError {
    fn from(err: config::ConfigError) -> Self {
        DatasetError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DatasetError>;
