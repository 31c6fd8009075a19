//! Configuration module
//!
//! The CLI reads an optional TOML file; command-line flags override it.
//!
//! ```toml
//! [hyphenation]
//! language = "en-us"
//! threshold = "average"
//! hyphen = "-"
//!
//! [paths]
//! patterns_dir = "/usr/share/hyph-utf8"
//! cache_dir = "~/.cache/syllab"
//!
//! [output]
//! format = "text"
//! pretty_json = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use syllab_core::Threshold;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Hyphenation configuration
    #[serde(default)]
    pub hyphenation: HyphenationConfig,

    /// Filesystem locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Hyphenation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HyphenationConfig {
    /// Language identifier (`hyph-<language>.tex`)
    pub language: String,

    /// `most`, `average`, `least` or a numeric cutoff
    pub threshold: Threshold,

    /// Joiner: `soft`, `entity`, or literal text
    pub hyphen: String,
}

impl Default for HyphenationConfig {
    fn default() -> Self {
        Self {
            language: syllab_api::config::DEFAULT_LANGUAGE.to_string(),
            threshold: Threshold::default(),
            hyphen: "-".to_string(),
        }
    }
}

/// Filesystem-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Directory holding `hyph-<language>.tex` dictionaries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patterns_dir: Option<PathBuf>,

    /// Directory for cached pattern tables; no caching when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Input text with hyphens inserted
    #[default]
    Text,
    /// JSON array of words with their fragments
    Json,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Problems that would make the configuration unusable
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if let Err(err) = syllab_engine::error::validate_language_id(&self.hyphenation.language) {
            problems.push(err.to_string());
        }
        if let Some(dir) = &self.paths.patterns_dir {
            if !dir.is_dir() {
                problems.push(format!(
                    "patterns directory does not exist: {}",
                    dir.display()
                ));
            }
        }
        problems
    }
}
