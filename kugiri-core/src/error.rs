//! Layered error types
//!
//! Dictionary problems are reported by [`DictionaryError`]; the engine wraps
//! them in [`EngineError`] when construction cannot obtain its dictionary.
//! Broken internal invariants are not represented here: they panic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be read
    #[error("failed to read dictionary {path:?}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The dictionary document is not valid TOML for the expected schema
    #[error("failed to parse dictionary: {0}")]
    Parse(String),

    /// The document parsed but its contents are unusable
    #[error("invalid dictionary: {0}")]
    Invalid(String),
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// The dictionary could not be obtained while constructing an engine
    #[error("dictionary load failed: {0}")]
    DictionaryLoad(#[from] DictionaryError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error_display() {
        let err = DictionaryError::Invalid("no words defined".to_string());
        assert_eq!(err.to_string(), "invalid dictionary: no words defined");

        let err = DictionaryError::Parse("expected `=`".to_string());
        assert!(err.to_string().starts_with("failed to parse dictionary"));
    }

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = DictionaryError::Io {
            path: PathBuf::from("/missing/dict.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/dict.toml"));
        assert!(msg.contains("gone"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_engine_error_from_dictionary_error() {
        let err: EngineError = DictionaryError::Invalid("empty word".to_string()).into();
        assert!(matches!(err, EngineError::DictionaryLoad(_)));
        assert_eq!(
            err.to_string(),
            "dictionary load failed: invalid dictionary: empty word"
        );
    }
}
