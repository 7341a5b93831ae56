//! Dictionary configuration
//!
//! This module defines the TOML schema for word lists.

use crate::error::DictionaryError;
use crate::segmenter::MAX_WORD_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use unicode_normalization::UnicodeNormalization;

/// Root dictionary document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub metadata: DictionaryMetadata,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

/// Dictionary metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One word and its cost
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub text: String,
    pub cost: u32,
}

impl DictionaryConfig {
    /// Parse a dictionary document without validating it
    pub fn from_toml_str(source: &str) -> Result<Self, DictionaryError> {
        toml::from_str(source).map_err(|e| DictionaryError::Parse(e.to_string()))
    }

    /// Read and parse a dictionary file without validating it
    pub fn from_file(path: &Path) -> Result<Self, DictionaryError> {
        let source = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DictionaryError> {
        if self.metadata.name.trim().is_empty() {
            return Err(DictionaryError::Invalid(
                "metadata.name cannot be empty".to_string(),
            ));
        }

        if self.words.is_empty() {
            return Err(DictionaryError::Invalid("no words defined".to_string()));
        }

        for (index, entry) in self.words.iter().enumerate() {
            // Words are matched in NFKC, where some characters expand
            let length = entry.text.nfkc().count();
            if length == 0 {
                return Err(DictionaryError::Invalid(format!(
                    "word #{} is empty",
                    index + 1
                )));
            }
            if length > MAX_WORD_SIZE {
                return Err(DictionaryError::Invalid(format!(
                    "word '{}' has {length} characters (max {MAX_WORD_SIZE})",
                    entry.text
                )));
            }
        }

        Ok(())
    }
}
