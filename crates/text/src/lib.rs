//! Transcript text handling for TTS corpus loading
//!
//! This crate provides the text side of corpus preparation:
//! - **Vocabulary Table**: fixed ordered symbol/code mapping shared by
//!   encoding and decoding
//! - **Text Normalizer**: accent stripping, vocabulary filtering, space
//!   collapsing
//! - **Batch Encoder**: raw sentences to a padded integer matrix for
//!   inference
//!
//! # Example
//!
//! ```
//! use tts_corpus_text::{BatchEncoder, TextNormalizer, Vocabulary};
//!
//! let normalizer = TextNormalizer::new(Vocabulary::bengali());
//! assert_eq!(normalizer.normalize("অ    আ"), "অ আ");
//!
//! let batch = BatchEncoder::new().encode_batch(&["অআ"], 5)?;
//! assert_eq!(batch.dim(), (1, 6));
//! # Ok::<(), tts_corpus_text::TextError>(())
//! ```

mod encoder;
mod error;
mod normalizer;
mod vocabulary;

pub use encoder::BatchEncoder;
pub use error::{Result, TextError};
pub use normalizer::TextNormalizer;
pub use vocabulary::{Vocabulary, EOS_CODE, PAD_CODE};
