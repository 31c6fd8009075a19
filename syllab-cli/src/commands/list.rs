//! List command implementation

use crate::config::{CliConfig, OutputFormat};
use crate::patterns_dir::PatternsDir;
use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;
use syllab_engine::DirectorySource;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages with a pattern dictionary
    Languages {
        /// Directory holding hyph-<language>.tex files
        #[arg(long, value_name = "DIR")]
        patterns_dir: Option<PathBuf>,

        /// Configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Languages {
                patterns_dir,
                config,
            } => {
                let file_config = match config {
                    Some(path) => CliConfig::from_file(path)?,
                    None => CliConfig::default(),
                };
                let dir = PatternsDir::from_sources(
                    patterns_dir.as_deref(),
                    file_config.paths.patterns_dir.as_deref(),
                )?;
                log::info!("listing languages from {}", dir.display_name());

                let languages = DirectorySource::new(dir.path())
                    .list_languages()
                    .with_context(|| {
                        format!("Failed to list languages in {}", dir.path().display())
                    })?;
                if languages.is_empty() {
                    eprintln!("No languages found in {}", dir.path().display());
                }
                for language in languages {
                    println!("{language}");
                }
                Ok(())
            }
            ListCommands::Formats => {
                for format in OutputFormat::value_variants() {
                    if let Some(value) = format.to_possible_value() {
                        let help = value.get_help().map(ToString::to_string);
                        println!("{:<6} {}", value.get_name(), help.unwrap_or_default());
                    }
                }
                Ok(())
            }
        }
    }
}
