//! API error types

use std::string::FromUtf8Error;
use syllab_engine::EngineError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error (language loading, caching)
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Word pattern that does not compile
    #[error("invalid word pattern: {0}")]
    WordPattern(#[from] regex::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
