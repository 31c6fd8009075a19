//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(value_name = "FILE")]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = match CliConfig::from_file(&self.config) {
            Ok(config) => config,
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                return Err(anyhow::anyhow!("Validation failed: {e}"));
            }
        };

        let problems = config.problems();
        if !problems.is_empty() {
            println!("✗ Configuration is invalid!");
            for problem in &problems {
                println!("  Error: {problem}");
            }
            anyhow::bail!("Validation failed with {} problem(s)", problems.len());
        }

        println!("✓ Configuration is valid!");
        println!("  Language: {}", config.hyphenation.language);
        println!("  Threshold: {}", config.hyphenation.threshold);
        if let Some(dir) = &config.paths.patterns_dir {
            println!("  Patterns: {}", dir.display());
        }
        Ok(())
    }
}
