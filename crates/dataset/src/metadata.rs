//! Metadata index reader
//!
//! Parses the tab-separated index file (`<file_identifier><TAB><text>`
//! per line) into three parallel vectors: file identifiers, transcript
//! lengths and integer-encoded transcripts, each transcript terminated
//! with the end-of-sequence code.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use tts_corpus_text::{TextNormalizer, Vocabulary, EOS_CODE};

use crate::error::{DatasetError, Result};

/// Parallel index of one corpus: entry `i` of each vector refers to the
/// same source example
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    file_ids: Vec<String>,
    lengths: Vec<usize>,
    transcripts: Vec<Vec<u32>>,
}

impl Metadata {
    /// Number of indexed examples
    pub fn len(&self) -> usize {
        self.file_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file_ids.is_empty()
    }

    pub fn file_ids(&self) -> &[String] {
        &self.file_ids
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn file_id(&self, index: usize) -> Option<&str> {
        self.file_ids.get(index).map(String::as_str)
    }

    /// Encoded transcript at `index`, end-of-sequence code included;
    /// `None` past the end of the index
    pub fn transcript(&self, index: usize) -> Option<&[u32]> {
        self.transcripts.get(index).map(Vec::as_slice)
    }

    /// Truncate all three vectors to `[start, end)`. One-shot, no undo;
    /// bounds are the caller's responsibility.
    pub(crate) fn slice(&mut self, start: usize, end: usize) {
        self.file_ids.truncate(end);
        self.file_ids.drain(..start);
        self.lengths.truncate(end);
        self.lengths.drain(..start);
        self.transcripts.truncate(end);
        self.transcripts.drain(..start);
    }
}

/// Read a metadata index file.
///
/// Each line is split on tabs and must have exactly two fields; anything
/// else aborts the whole load with [`DatasetError::MalformedRecord`].
/// Transcript text is normalized, encoded through the vocabulary and
/// terminated with the end-of-sequence code.
pub fn read_metadata(
    path: &Path,
    vocabulary: &Vocabulary,
    normalizer: &TextNormalizer,
) -> Result<Metadata> {
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DatasetError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetError::Io(err),
    })?;

    let mut metadata = Metadata::default();
    for (number, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        let &[file_id, raw_text] = fields.as_slice() else {
            return Err(DatasetError::MalformedRecord {
                line: number + 1,
                found: fields.len(),
            });
        };

        let mut transcript = vocabulary.encode(&normalizer.normalize(raw_text))?;
        transcript.push(EOS_CODE);

        metadata.file_ids.push(file_id.to_string());
        metadata.lengths.push(transcript.len());
        metadata.transcripts.push(transcript);
    }

    debug!(
        path = %path.display(),
        examples = metadata.len(),
        "read metadata index"
    );
    Ok(metadata)
}
