//! Batch encoding of raw sentences for inference
//!
//! Turns a list of sentences into the fixed-width integer matrix the
//! synthesis model consumes: one row per sentence, normalized text plus
//! the end-of-sequence code left-aligned, padding code everywhere else.

use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, TextError};
use crate::normalizer::TextNormalizer;
use crate::vocabulary::{Vocabulary, EOS_CODE};

/// Encodes inference sentences into a padded code matrix
pub struct BatchEncoder {
    vocabulary: &'static Vocabulary,
    normalizer: TextNormalizer,
}

impl BatchEncoder {
    pub fn new() -> Self {
        let vocabulary = Vocabulary::bengali();
        Self {
            vocabulary,
            normalizer: TextNormalizer::new(vocabulary),
        }
    }

    /// Encode `sentences` into a `(sentences.len(), max_len + 1)` matrix.
    ///
    /// Each sentence is normalized, trimmed and terminated with the
    /// end-of-sequence code; the extra column leaves room for that
    /// terminator on a sentence of exactly `max_len` symbols. Unused
    /// positions hold the padding code (zero). A sentence that does not
    /// fit its row fails with [`TextError::SequenceTooLong`] rather than
    /// being truncated.
    pub fn encode_batch<S: AsRef<str>>(
        &self,
        sentences: &[S],
        max_len: usize,
    ) -> Result<Array2<i64>> {
        let capacity = max_len + 1;
        let mut batch = Array2::<i64>::zeros((sentences.len(), capacity));

        for (row, sentence) in sentences.iter().enumerate() {
            let normalized = self.normalizer.normalize(sentence.as_ref());
            let mut codes = self.vocabulary.encode(normalized.trim())?;
            codes.push(EOS_CODE);
            if codes.len() > capacity {
                return Err(TextError::SequenceTooLong {
                    length: codes.len(),
                    capacity,
                });
            }
            for (col, &code) in codes.iter().enumerate() {
                batch[[row, col]] = i64::from(code);
            }
        }

        debug!(
            sentences = sentences.len(),
            width = capacity,
            "encoded inference batch"
        );
        Ok(batch)
    }
}

impl Default for BatchEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::PAD_CODE;

    #[test]
    fn test_shape_and_padding() {
        let encoder = BatchEncoder::new();
        let batch = encoder.encode_batch(&["অআ"], 5).unwrap();
        assert_eq!(batch.dim(), (1, 6));

        let vocab = Vocabulary::bengali();
        let expected = [
            i64::from(vocab.code('অ').unwrap()),
            i64::from(vocab.code('আ').unwrap()),
            i64::from(EOS_CODE),
            i64::from(PAD_CODE),
            i64::from(PAD_CODE),
            i64::from(PAD_CODE),
        ];
        for (col, &code) in expected.iter().enumerate() {
            assert_eq!(batch[[0, col]], code);
        }
    }

    #[test]
    fn test_trims_before_encoding() {
        let encoder = BatchEncoder::new();
        // "অ?" normalizes to "অ " and the trailing space is trimmed,
        // so the row is exactly symbol + terminator.
        let batch = encoder.encode_batch(&["অ?"], 1).unwrap();
        assert_eq!(batch.dim(), (1, 2));
        assert_eq!(batch[[0, 1]], i64::from(EOS_CODE));
    }

    #[test]
    fn test_sequence_too_long() {
        let encoder = BatchEncoder::new();
        let err = encoder.encode_batch(&["অআই"], 2).unwrap_err();
        assert_eq!(
            err,
            TextError::SequenceTooLong {
                length: 4,
                capacity: 3
            }
        );
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        let encoder = BatchEncoder::new();
        let batch = encoder.encode_batch(&["অআই"], 3).unwrap();
        assert_eq!(batch.dim(), (1, 4));
        assert_eq!(batch[[0, 3]], i64::from(EOS_CODE));
    }

    #[test]
    fn test_empty_batch() {
        let encoder = BatchEncoder::new();
        let batch = encoder.encode_batch::<&str>(&[], 4).unwrap();
        assert_eq!(batch.dim(), (0, 5));
    }
}
