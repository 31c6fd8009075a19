//! Core error types (deterministic only)

use core::fmt;

/// Core algorithm errors (no I/O, no external failures)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Threshold name or value could not be interpreted
    InvalidThreshold(String),
    /// Margin value of zero or out of range
    InvalidMargin {
        /// Which side of the word the margin applies to
        side: &'static str,
        /// The rejected value
        value: usize,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::InvalidThreshold(raw) => write!(
                f,
                "invalid threshold '{raw}': expected most, average, least or an integer"
            ),
            CoreError::InvalidMargin { side, value } => {
                write!(f, "invalid {side} margin {value}: must be at least 1")
            }
        }
    }
}

impl std::error::Error for CoreError {}

/// Result type for core operations
pub type Result<T> = core::result::Result<T, CoreError>;
