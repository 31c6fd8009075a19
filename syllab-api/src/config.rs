//! High-level configuration API

use crate::error::{ApiError, Result};
use crate::text::DEFAULT_WORD_PATTERN;
use std::path::{Path, PathBuf};
use syllab_core::Threshold;

/// Default language identifier
pub const DEFAULT_LANGUAGE: &str = "en-us";

/// Where parsed pattern tables are kept between loads
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CacheMode {
    /// Parse the dictionary on every load
    #[default]
    Disabled,
    /// Keep tables in process memory
    Memory,
    /// Keep one JSON file per language in a directory
    Directory(PathBuf),
}

/// High-level configuration for hyphenation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    language: String,
    threshold: Threshold,
    margins: Option<(usize, usize)>,
    patterns_dir: Option<PathBuf>,
    cache: CacheMode,
    hyphen: String,
    word_pattern: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            threshold: Threshold::default(),
            margins: None,
            patterns_dir: None,
            cache: CacheMode::default(),
            hyphen: "-".to_string(),
            word_pattern: DEFAULT_WORD_PATTERN.to_string(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Language identifier
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Threshold policy
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Margin override as `(left, right)`; `None` uses the dictionary's
    pub fn margins(&self) -> Option<(usize, usize)> {
        self.margins
    }

    /// Directory holding `hyph-<lang>.tex` files
    pub fn patterns_dir(&self) -> Option<&Path> {
        self.patterns_dir.as_deref()
    }

    /// Cache mode
    pub fn cache(&self) -> &CacheMode {
        &self.cache
    }

    /// Hyphen name or marker, see [`crate::hyphen::hyphen_from_name`]
    pub fn hyphen(&self) -> &str {
        &self.hyphen
    }

    /// Regular expression matching words in running text
    pub fn word_pattern(&self) -> &str {
        &self.word_pattern
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the language
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.config.language = language.into();
        self
    }

    /// Set the threshold policy
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.config.threshold = threshold;
        self
    }

    /// Parse and set the threshold policy (`most`, `average`, `least` or a number)
    pub fn threshold_str(mut self, threshold: &str) -> Result<Self> {
        self.config.threshold = threshold
            .parse()
            .map_err(|e: syllab_core::CoreError| ApiError::Config(e.to_string()))?;
        Ok(self)
    }

    /// Override the dictionary's margins
    pub fn margins(mut self, left: usize, right: usize) -> Self {
        self.config.margins = Some((left, right));
        self
    }

    /// Set the pattern directory
    pub fn patterns_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.patterns_dir = Some(dir.into());
        self
    }

    /// Set the cache mode
    pub fn cache(mut self, cache: CacheMode) -> Self {
        self.config.cache = cache;
        self
    }

    /// Cache tables as JSON files in `dir`
    pub fn cache_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.cache(CacheMode::Directory(dir.into()))
    }

    /// Set the hyphen name or marker
    pub fn hyphen(mut self, hyphen: impl Into<String>) -> Self {
        self.config.hyphen = hyphen.into();
        self
    }

    /// Set the word pattern used for running text
    pub fn word_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.config.word_pattern = pattern.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        // Validate configuration
        if self.config.language.is_empty() {
            return Err(ApiError::Config("language required".to_string()));
        }
        if let Some((left, right)) = self.config.margins {
            if left == 0 || right == 0 {
                return Err(ApiError::Config(format!(
                    "margins must be at least 1, got left {left} right {right}"
                )));
            }
        }
        if self.config.word_pattern.is_empty() {
            return Err(ApiError::Config("word pattern must not be empty".to_string()));
        }

        Ok(self.config)
    }
}
