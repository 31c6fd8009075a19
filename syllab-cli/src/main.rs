//! `syllab` command-line entry point

use anyhow::Result;
use clap::Parser;
use syllab_cli::commands::Commands;

/// Syllable segmentation with TeX hyphenation patterns
#[derive(Debug, Parser)]
#[command(name = "syllab", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    log::debug!("arguments: {cli:?}");
    cli.command.execute(cli.quiet)
}
