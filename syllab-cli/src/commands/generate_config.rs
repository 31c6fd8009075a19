//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

const HEADER: &str = "\
# syllab configuration
#
# hyphenation.threshold: most | average | least | <number>
# hyphenation.hyphen:    soft | entity | <literal text>
# output.format:         text | json
";

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language to put in the configuration
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<String>,

    /// Patterns directory to put in the configuration
    #[arg(long, value_name = "DIR")]
    pub patterns_dir: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        std::fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration written to {}", output.display());
        println!();
        println!("Next steps:");
        println!("1. Set [paths] patterns_dir to your hyph-utf8 dictionaries");
        println!("2. Validate your configuration:");
        println!("   syllab validate {}", output.display());
        println!("3. Use it for hyphenation:");
        println!("   syllab hyphenate -c {} -i input.txt", output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> Result<String> {
        let mut config = CliConfig::default();
        if let Some(language) = &self.language {
            config.hyphenation.language = language.clone();
        }
        config.paths.patterns_dir = self.patterns_dir.clone();
        Ok(format!("{HEADER}\n{}", config.to_toml()?))
    }
}
