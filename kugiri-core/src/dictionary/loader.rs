//! Dictionary loader
//!
//! Manages the embedded word list and dictionaries read from disk.

use super::{DictionaryConfig, DictionaryMatcher, WordListDictionary};
use crate::error::DictionaryError;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Embedded dictionary, parsed on first use
static EMBEDDED: OnceLock<Result<Arc<WordListDictionary>, String>> = OnceLock::new();

const EMBEDDED_TOML: &str = include_str!("../../configs/dictionaries/basic.toml");

/// Where an engine obtains its dictionary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DictionarySource {
    /// The word list compiled into the crate
    #[default]
    Embedded,
    /// A TOML word list on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Load (or fetch the cached) dictionary
    pub fn load(&self) -> Result<Arc<dyn DictionaryMatcher>, DictionaryError> {
        match self {
            DictionarySource::Embedded => {
                let dictionary: Arc<dyn DictionaryMatcher> = embedded()?;
                Ok(dictionary)
            }
            DictionarySource::File(path) => {
                let config = DictionaryConfig::from_file(path)?;
                let dictionary = WordListDictionary::from_config(&config)?;
                debug!(
                    "loaded dictionary '{}' from {} ({} words)",
                    dictionary.name(),
                    path.display(),
                    dictionary.len()
                );
                Ok(Arc::new(dictionary))
            }
        }
    }

    /// Get the display name for the dictionary source
    pub fn display_name(&self) -> String {
        match self {
            DictionarySource::Embedded => "Built-in".to_string(),
            DictionarySource::File(path) => format!("External: {}", path.display()),
        }
    }
}

/// The embedded dictionary shared by every engine in the process
pub fn embedded() -> Result<Arc<WordListDictionary>, DictionaryError> {
    EMBEDDED
        .get_or_init(|| {
            let config =
                DictionaryConfig::from_toml_str(EMBEDDED_TOML).map_err(|e| e.to_string())?;
            let dictionary = WordListDictionary::from_config(&config).map_err(|e| e.to_string())?;
            debug!(
                "parsed embedded dictionary '{}' ({} words)",
                dictionary.name(),
                dictionary.len()
            );
            Ok(Arc::new(dictionary))
        })
        .clone()
        .map_err(|reason| DictionaryError::Invalid(format!("embedded dictionary: {reason}")))
}
