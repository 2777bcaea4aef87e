//! Error types for text normalization and encoding

use thiserror::Error;

/// Errors raised while encoding or decoding transcript text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A character outside the vocabulary reached an encode step.
    /// Normalization filters these out, so hitting this indicates the
    /// input bypassed the normalizer.
    #[error("character {0:?} is not in the vocabulary")]
    OutOfVocabulary(char),

    /// A code outside the vocabulary range reached a decode step
    #[error("code {0} has no vocabulary symbol")]
    UnknownCode(u32),

    /// An encoded sentence does not fit its batch row
    #[error("encoded sentence is {length} codes long but the batch row holds {capacity}")]
    SequenceTooLong { length: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, TextError>;
