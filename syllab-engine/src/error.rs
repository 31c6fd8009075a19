//! Engine error types
//!
//! Wraps core errors and adds the failures of the I/O edge: language
//! sources and pattern caches.

use std::path::PathBuf;
use syllab_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Neither the source nor the cache knows the language
    #[error("no hyphenation patterns found for language '{language}'")]
    LanguageNotFound {
        /// The requested language identifier
        language: String,
    },

    /// Language identifier that cannot name a dictionary file
    #[error("invalid language identifier '{language}'")]
    InvalidLanguage {
        /// The rejected identifier
        language: String,
    },

    /// Writing a cache entry failed
    #[error("failed to write cache entry {path}: {reason}")]
    CacheWrite {
        /// Cache file that could not be written
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Serializing or deserializing a pattern table failed
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Check that `language` is usable as part of a file name.
///
/// Identifiers are ASCII letters, digits, `-` and `_` (`en-us`, `de-1996`).
pub fn validate_language_id(language: &str) -> Result<()> {
    let valid = !language.is_empty()
        && language
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if valid {
        Ok(())
    } else {
        Err(EngineError::InvalidLanguage {
            language: language.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_not_found_message() {
        let err = EngineError::LanguageNotFound {
            language: "xx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no hyphenation patterns found for language 'xx'"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Io(msg) if msg.contains("denied")));
    }

    #[test]
    fn test_serde_conversion() {
        let json_err = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: EngineError = json_err.into();
        assert!(matches!(err, EngineError::Serialization(_)));
    }

    #[test]
    fn test_core_conversion() {
        let err: EngineError = CoreError::InvalidThreshold("x".to_string()).into();
        assert!(matches!(err, EngineError::Core(_)));
    }

    #[test]
    fn test_validate_language_id() {
        assert!(validate_language_id("en-us").is_ok());
        assert!(validate_language_id("de_1996").is_ok());
        assert!(validate_language_id("").is_err());
        assert!(validate_language_id("../etc").is_err());
        assert!(validate_language_id("en us").is_err());
    }
}
