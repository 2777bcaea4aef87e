//! Dataset configuration
//!
//! Loaded from a file plus `TTS_CORPUS`-prefixed environment variables,
//! with per-field serde defaults matching the reference corpus layout.

use std::fmt;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{DatasetError, Result};

/// Per-example fields the dataset can assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Integer-encoded transcript
    Texts,
    /// Mel spectrogram matrix
    Mels,
    /// Magnitude spectrogram matrix
    Mags,
    /// Per-frame validity gates for the mel matrix
    MelGates,
    /// Per-frame validity gates for the magnitude matrix
    MagGates,
}

impl Field {
    /// The feature field a gate field is derived from
    pub fn gate_source(self) -> Option<Field> {
        match self {
            Field::MelGates => Some(Field::Mels),
            Field::MagGates => Some(Field::Mags),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Texts => "texts",
            Field::Mels => "mels",
            Field::Mags => "mags",
            Field::MelGates => "mel_gates",
            Field::MagGates => "mag_gates",
        };
        f.write_str(name)
    }
}

/// Corpus location and requested per-example fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Corpus root directory
    pub root: PathBuf,
    /// Metadata index file, relative to `root`
    #[serde(default = "default_metadata_file")]
    pub metadata_file: String,
    /// Mel spectrogram directory, relative to `root`
    #[serde(default = "default_mels_dir")]
    pub mels_dir: String,
    /// Magnitude spectrogram directory, relative to `root`
    #[serde(default = "default_mags_dir")]
    pub mags_dir: String,
    /// Fields assembled per example
    #[serde(default = "default_fields")]
    pub fields: Vec<Field>,
}

fn default_metadata_file() -> String {
    "line_index.tsv".to_string()
}

fn default_mels_dir() -> String {
    "mels".to_string()
}

fn default_mags_dir() -> String {
    "mags".to_string()
}

fn default_fields() -> Vec<Field> {
    vec![
        Field::Texts,
        Field::Mels,
        Field::Mags,
        Field::MelGates,
        Field::MagGates,
    ]
}

impl DatasetConfig {
    /// Config for a corpus root with the default layout and fields
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            metadata_file: default_metadata_file(),
            mels_dir: default_mels_dir(),
            mags_dir: default_mags_dir(),
            fields: default_fields(),
        }
    }

    /// Replace the requested field set
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// Check that every gate field has its source feature field.
    ///
    /// Gate arrays are sized from the loaded feature matrix, so a gate
    /// without its feature can never be assembled; rejecting it here
    /// keeps `get` from failing on every call.
    pub fn validate(&self) -> Result<()> {
        for &field in &self.fields {
            if let Some(feature) = field.gate_source() {
                if !self.fields.contains(&feature) {
                    return Err(DatasetError::GateWithoutFeature {
                        gate: field,
                        feature,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Load and validate a [`DatasetConfig`].
///
/// Sources are layered: the optional config file first, then
/// `TTS_CORPUS`-prefixed environment variables (`TTS_CORPUS_ROOT=...`),
/// which override file values.
pub fn load_config(path: Option<&Path>) -> Result<DatasetConfig> {
    let mut builder = Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }

    builder = builder.add_source(
        Environment::with_prefix("TTS_CORPUS")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let config: DatasetConfig = config.try_deserialize()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DatasetConfig::for_root("/data/bn_in");
        assert_eq!(config.metadata_file, "line_index.tsv");
        assert_eq!(config.mels_dir, "mels");
        assert_eq!(config.mags_dir, "mags");
        assert_eq!(config.fields.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_field_names_round_trip_snake_case() {
        let json = serde_json::to_string(&Field::MelGates).unwrap();
        assert_eq!(json, "\"mel_gates\"");
        let field: Field = serde_json::from_str("\"mags\"").unwrap();
        assert_eq!(field, Field::Mags);
    }

    #[test]
    fn test_gate_without_feature_rejected() {
        let config = DatasetConfig::for_root("/data/bn_in")
            .with_fields(vec![Field::Texts, Field::MelGates]);
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            DatasetError::GateWithoutFeature {
                gate: Field::MelGates,
                feature: Field::Mels,
            }
        ));
    }

    #[test]
    fn test_partial_config_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        std::fs::write(&path, r#"{ "root": "/data/bn_in", "fields": ["texts"] }"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.root, PathBuf::from("/data/bn_in"));
        assert_eq!(config.fields, vec![Field::Texts]);
        assert_eq!(config.mels_dir, "mels");
    }
}
