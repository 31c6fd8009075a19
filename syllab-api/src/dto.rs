//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// One word and its syllable fragments
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordSplit {
    /// The word as it appeared in the input
    pub word: String,
    /// Fragments; they concatenate to `word`
    pub fragments: Vec<String>,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Language identifier of the pattern table used
    pub language: String,
    /// Threshold in effect, as displayed
    pub threshold: String,
    /// Number of words found
    pub word_count: usize,
    /// Number of breaks inserted
    pub break_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete output of processing one input
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// Input text with hyphens inserted
    pub hyphenated: String,
    /// Every word of the input with its fragments
    pub words: Vec<WordSplit>,
    /// Processing metadata
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_variants() {
        assert_eq!(Input::from_text("abc").read_text().unwrap(), "abc");
        assert_eq!(Input::from_bytes(b"abc".to_vec()).read_text().unwrap(), "abc");
        assert_eq!(
            Input::from_reader(std::io::Cursor::new("abc")).read_text().unwrap(),
            "abc"
        );
    }

    #[test]
    fn test_invalid_utf8() {
        let err = Input::from_bytes(vec![0xff, 0xfe]).read_text().unwrap_err();
        assert!(matches!(err, ApiError::Utf8(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Input::from_file("/nonexistent/syllab.txt").read_text().unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[test]
    fn test_debug_hides_reader() {
        let input = Input::from_reader(std::io::empty());
        assert_eq!(format!("{input:?}"), "Reader(\"<dyn Read>\")");
    }
}
