//! Indexed dataset facade
//!
//! Combines the in-memory metadata index with on-demand loading of
//! per-example spectrogram files. `get` is read-only and repeatable;
//! `slice` mutates the index in place, so a slicing instance must not
//! be shared across threads.

use std::path::PathBuf;

use ndarray::{Array1, Array2};
use ndarray_npy::read_npy;
use tracing::{debug, info};

use tts_corpus_text::{TextNormalizer, Vocabulary};

use crate::config::{DatasetConfig, Field};
use crate::error::{DatasetError, Result};
use crate::metadata::{read_metadata, Metadata};

/// One corpus example, holding only the requested fields
#[derive(Debug, Clone, Default)]
pub struct Example {
    /// Encoded transcript, end-of-sequence code included
    pub texts: Option<Vec<u32>>,
    /// Mel spectrogram, time steps x mel bins
    pub mels: Option<Array2<f32>>,
    /// Magnitude spectrogram, time steps x frequency bins
    pub mags: Option<Array2<f32>>,
    /// One gate per mel time step; all ones until per-frame validity
    /// marking lands in preprocessing
    pub mel_gates: Option<Array1<i64>>,
    /// One gate per magnitude time step; all ones, same placeholder
    pub mag_gates: Option<Array1<i64>>,
}

/// Random-access view over a speech corpus
#[derive(Debug)]
pub struct SpeechDataset {
    config: DatasetConfig,
    metadata: Metadata,
}

impl SpeechDataset {
    /// Open the corpus described by `config`: validate the field set and
    /// build the transcript index from the metadata file.
    pub fn open(config: DatasetConfig) -> Result<Self> {
        config.validate()?;

        let vocabulary = Vocabulary::bengali();
        let normalizer = TextNormalizer::new(vocabulary);
        let metadata = read_metadata(
            &config.root.join(&config.metadata_file),
            vocabulary,
            &normalizer,
        )?;

        info!(
            root = %config.root.display(),
            examples = metadata.len(),
            "speech dataset ready"
        );
        Ok(Self { config, metadata })
    }

    /// Number of examples in the (possibly sliced) index
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Restrict the index to `[start, end)`.
    ///
    /// One-shot truncation of all three parallel vectors; there is no
    /// way back to the full index short of reopening the dataset.
    pub fn slice(&mut self, start: usize, end: usize) -> Result<()> {
        if start > end || end > self.len() {
            return Err(DatasetError::InvalidSlice {
                start,
                end,
                len: self.len(),
            });
        }
        self.metadata.slice(start, end);
        debug!(start, end, "restricted dataset index");
        Ok(())
    }

    /// Assemble the requested fields for the example at `index`.
    ///
    /// Transcripts come from the in-memory index; spectrograms are read
    /// from `<root>/<dir>/<file_identifier>.npy` on every call. Gate
    /// arrays are sized from the loaded feature matrix, which is why
    /// config validation requires the feature field alongside its gate.
    pub fn get(&self, index: usize) -> Result<Example> {
        if index >= self.len() {
            return Err(DatasetError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }

        let mut example = Example::default();
        if self.requested(Field::Texts) {
            let transcript = self.metadata.transcript(index).ok_or(
                DatasetError::IndexOutOfBounds {
                    index,
                    len: self.len(),
                },
            )?;
            example.texts = Some(transcript.to_vec());
        }
        if self.requested(Field::Mels) {
            example.mels = Some(self.load_feature(&self.config.mels_dir, index)?);
        }
        if self.requested(Field::Mags) {
            example.mags = Some(self.load_feature(&self.config.mags_dir, index)?);
        }
        if self.requested(Field::MelGates) {
            example.mel_gates = Some(Self::gates(example.mels.as_ref(), Field::MelGates)?);
        }
        if self.requested(Field::MagGates) {
            example.mag_gates = Some(Self::gates(example.mags.as_ref(), Field::MagGates)?);
        }
        Ok(example)
    }

    fn requested(&self, field: Field) -> bool {
        self.config.fields.contains(&field)
    }

    /// All-valid gate vector for a loaded feature matrix
    fn gates(feature: Option<&Array2<f32>>, gate: Field) -> Result<Array1<i64>> {
        let feature = feature.ok_or_else(|| DatasetError::GateWithoutFeature {
            gate,
            // gate fields always have a source
            feature: gate.gate_source().unwrap_or(gate),
        })?;
        Ok(Array1::ones(feature.nrows()))
    }

    fn load_feature(&self, dir: &str, index: usize) -> Result<Array2<f32>> {
        let file_id = self
            .metadata
            .file_id(index)
            .ok_or(DatasetError::IndexOutOfBounds {
                index,
                len: self.metadata.len(),
            })?;
        let path: PathBuf = self
            .config
            .root
            .join(dir)
            .join(format!("{file_id}.npy"));
        if !path.exists() {
            return Err(DatasetError::ResourceNotFound { path });
        }
        read_npy(&path).map_err(|source| DatasetError::FeatureRead { path, source })
    }
}
