//! Where raw pattern dictionaries come from
//!
//! A source hands out the text of a `\patterns{}` / `\hyphenation{}`
//! dictionary plus the optional margins file for a language. Parsing is the
//! loader's business.

use crate::error::{validate_language_id, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "hyph-";
const PATTERN_SUFFIX: &str = ".tex";
const MARGINS_SUFFIX: &str = ".min.txt";

/// Raw dictionary text for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    /// Pattern file contents
    pub patterns: String,
    /// Margins file contents, if the language has one
    pub constraints: Option<String>,
}

/// Provider of raw dictionary text.
pub trait PatternSource: Send + Sync {
    /// Fetch the dictionary for `language`.
    ///
    /// `Ok(None)` means the source has no such language; `Err` is reserved
    /// for a dictionary that exists but could not be read.
    fn read(&self, language: &str) -> Result<Option<SourceText>>;

    /// Identifiers of every language this source can provide, sorted.
    fn languages(&self) -> Result<Vec<String>>;
}

/// Dictionaries stored as `hyph-<lang>.tex` (+ `hyph-<lang>.min.txt`) files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the pattern file for `language`.
    pub fn pattern_path(&self, language: &str) -> PathBuf {
        self.dir
            .join(format!("{FILE_PREFIX}{language}{PATTERN_SUFFIX}"))
    }

    /// Path of the margins file for `language`.
    pub fn margins_path(&self, language: &str) -> PathBuf {
        self.dir
            .join(format!("{FILE_PREFIX}{language}{MARGINS_SUFFIX}"))
    }

    /// List the languages present in the directory.
    pub fn list_languages(&self) -> Result<Vec<String>> {
        let mut languages = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            let language = name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(PATTERN_SUFFIX));
            if let Some(language) = language {
                if validate_language_id(language).is_ok() {
                    languages.push(language.to_string());
                }
            }
        }
        languages.sort();
        Ok(languages)
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

impl PatternSource for DirectorySource {
    fn read(&self, language: &str) -> Result<Option<SourceText>> {
        validate_language_id(language)?;
        let pattern_path = self.pattern_path(language);
        let Some(patterns) = read_optional(&pattern_path)? else {
            log::debug!("no pattern file at {}", pattern_path.display());
            return Ok(None);
        };
        let constraints = read_optional(&self.margins_path(language))?;
        Ok(Some(SourceText {
            patterns,
            constraints,
        }))
    }

    fn languages(&self) -> Result<Vec<String>> {
        self.list_languages()
    }
}

/// Dictionaries held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    entries: HashMap<String, SourceText>,
}

impl StaticSource {
    /// Empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a language.
    #[must_use]
    pub fn with_language(
        mut self,
        language: impl Into<String>,
        patterns: impl Into<String>,
        constraints: Option<&str>,
    ) -> Self {
        self.entries.insert(
            language.into(),
            SourceText {
                patterns: patterns.into(),
                constraints: constraints.map(str::to_string),
            },
        );
        self
    }
}

impl PatternSource for StaticSource {
    fn read(&self, language: &str) -> Result<Option<SourceText>> {
        Ok(self.entries.get(language).cloned())
    }

    fn languages(&self) -> Result<Vec<String>> {
        let mut languages: Vec<String> = self.entries.keys().cloned().collect();
        languages.sort();
        Ok(languages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use tempfile::TempDir;

    #[test]
    fn test_directory_source_reads_both_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hyph-xx.tex"), "\\patterns{a1b}").unwrap();
        fs::write(dir.path().join("hyph-xx.min.txt"), "1 2").unwrap();

        let source = DirectorySource::new(dir.path());
        let text = source.read("xx").unwrap().unwrap();
        assert_eq!(text.patterns, "\\patterns{a1b}");
        assert_eq!(text.constraints.as_deref(), Some("1 2"));
    }

    #[test]
    fn test_directory_source_margins_optional() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hyph-xx.tex"), "").unwrap();

        let text = DirectorySource::new(dir.path()).read("xx").unwrap().unwrap();
        assert_eq!(text.constraints, None);
    }

    #[test]
    fn test_directory_source_missing_language() {
        let dir = TempDir::new().unwrap();
        assert_eq!(DirectorySource::new(dir.path()).read("xx").unwrap(), None);
    }

    #[test]
    fn test_directory_source_rejects_path_like_ids() {
        let dir = TempDir::new().unwrap();
        let err = DirectorySource::new(dir.path()).read("../xx").unwrap_err();
        assert!(matches!(err, EngineError::InvalidLanguage { .. }));
    }

    #[test]
    fn test_list_languages_sorted_and_filtered() {
        let dir = TempDir::new().unwrap();
        for name in ["hyph-nl.tex", "hyph-en-us.tex", "hyph-en-us.min.txt", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let languages = DirectorySource::new(dir.path()).list_languages().unwrap();
        assert_eq!(languages, vec!["en-us", "nl"]);
    }

    #[test]
    fn test_list_languages_missing_dir_is_error() {
        let source = DirectorySource::new("/nonexistent/syllab/patterns");
        assert!(matches!(source.list_languages(), Err(EngineError::Io(_))));
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new()
            .with_language("b", "\\patterns{}", None)
            .with_language("a", "\\patterns{a1b}", Some("1 1"));
        assert_eq!(source.languages().unwrap(), vec!["a", "b"]);
        let text = source.read("a").unwrap().unwrap();
        assert_eq!(text.constraints.as_deref(), Some("1 1"));
        assert_eq!(source.read("c").unwrap(), None);
    }
}
