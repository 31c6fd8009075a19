//! Locating the pattern dictionary directory

use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Environment variable naming the default patterns directory
pub const PATTERNS_DIR_ENV: &str = "SYLLAB_PATTERNS_DIR";

/// Where the patterns directory setting came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternsDir {
    /// `--patterns-dir` flag
    Flag(PathBuf),
    /// `[paths] patterns_dir` in the configuration file
    ConfigFile(PathBuf),
    /// `SYLLAB_PATTERNS_DIR`
    Environment(PathBuf),
}

impl PatternsDir {
    /// Pick the first available setting: flag, then config file, then
    /// environment.
    pub fn resolve(
        flag: Option<&Path>,
        config: Option<&Path>,
        environment: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        if let Some(dir) = flag {
            return Ok(PatternsDir::Flag(dir.to_path_buf()));
        }
        if let Some(dir) = config {
            return Ok(PatternsDir::ConfigFile(dir.to_path_buf()));
        }
        environment
            .map(PatternsDir::Environment)
            .ok_or(CliError::MissingPatternsDir)
    }

    /// [`PatternsDir::resolve`] reading the environment variable
    pub fn from_sources(flag: Option<&Path>, config: Option<&Path>) -> Result<Self, CliError> {
        let environment = std::env::var_os(PATTERNS_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::resolve(flag, config, environment)
    }

    /// The directory itself
    pub fn path(&self) -> &Path {
        match self {
            PatternsDir::Flag(path)
            | PatternsDir::ConfigFile(path)
            | PatternsDir::Environment(path) => path,
        }
    }

    /// Get the display name for the setting
    pub fn display_name(&self) -> String {
        match self {
            PatternsDir::Flag(path) => format!("--patterns-dir {}", path.display()),
            PatternsDir::ConfigFile(path) => format!("config file: {}", path.display()),
            PatternsDir::Environment(path) => {
                format!("{PATTERNS_DIR_ENV}={}", path.display())
            }
        }
    }
}
