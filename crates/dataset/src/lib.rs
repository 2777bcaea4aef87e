//! Speech corpus loading for TTS training
//!
//! This crate provides the data side of corpus preparation:
//! - **Metadata Reader**: tab-separated index file to parallel vectors
//!   of file identifiers, lengths and encoded transcripts
//! - **Indexed Dataset Facade**: per-example assembly of transcripts,
//!   precomputed spectrograms and gate arrays
//! - **Dataset configuration**: file + environment layered config with
//!   validated field requests
//!
//! # Example
//!
//! ```no_run
//! use tts_corpus_dataset::{DatasetConfig, Field, SpeechDataset};
//!
//! let config = DatasetConfig::for_root("/data/bn_in")
//!     .with_fields(vec![Field::Texts, Field::Mels, Field::MelGates]);
//! let mut dataset = SpeechDataset::open(config)?;
//!
//! dataset.slice(0, 100)?;
//! let example = dataset.get(0)?;
//! assert!(example.mels.is_some());
//! # Ok::<(), tts_corpus_dataset::DatasetError>(())
//! ```

mod config;
mod dataset;
mod error;
mod metadata;

pub use config::{load_config, DatasetConfig, Field};
pub use dataset::{Example, SpeechDataset};
pub use error::{DatasetError, Result};
pub use metadata::{read_metadata, Metadata};
