//! Hyphenate command implementation

use crate::config::{CliConfig, OutputFormat};
use crate::input::{collect_documents, Document, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::patterns_dir::PatternsDir;
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use syllab_api::{CacheMode, Config, Hyphenator, Input, Output};
use syllab_core::Threshold;

/// Arguments for the hyphenate command
#[derive(Debug, Args)]
pub struct HyphenateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to hyphenate when no input files are given (default: stdin)
    #[arg(value_name = "TEXT", conflicts_with = "input")]
    pub text: Vec<String>,

    /// Language identifier of the pattern dictionary
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,

    /// Directory holding hyph-<language>.tex files
    #[arg(long, value_name = "DIR")]
    pub patterns_dir: Option<PathBuf>,

    /// Cache parsed dictionaries as JSON in this directory
    #[arg(long, value_name = "DIR", conflicts_with = "no_cache")]
    pub cache_dir: Option<PathBuf>,

    /// Never read or write the dictionary cache
    #[arg(long)]
    pub no_cache: bool,

    /// Break threshold: most, average, least, or a number
    #[arg(short, long, value_name = "LEVEL", value_parser = parse_threshold)]
    pub threshold: Option<Threshold>,

    /// Joiner: soft, entity, or literal text
    #[arg(long, value_name = "HYPHEN", allow_hyphen_values = true)]
    pub hyphen: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for --parallel (default: all cores)
    #[arg(long, value_name = "N", requires = "parallel")]
    pub threads: Option<usize>,
}

fn parse_threshold(value: &str) -> std::result::Result<Threshold, String> {
    value.parse().map_err(|e: syllab_core::CoreError| e.to_string())
}

impl HyphenateArgs {
    /// Execute the hyphenate command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let config = self.api_config(&file_config)?;
        let hyphenator = Hyphenator::with_config(config)
            .with_context(|| "Failed to load hyphenation patterns")?;
        log::info!(
            "hyphenating with '{}' ({} patterns, threshold {})",
            hyphenator.language(),
            hyphenator.table().pattern_count(),
            hyphenator.threshold()
        );

        let documents = collect_documents(&self.input, &self.text)?;
        let outputs = self.process_documents(&hyphenator, &documents, quiet)?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(file_config.output.format);
        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer, file_config.output.pretty_json))
            }
        };

        for output in &outputs {
            formatter.format_document(output)?;
        }
        formatter.finish()
    }

    /// Merge flags over the configuration file into library configuration
    fn api_config(&self, file_config: &CliConfig) -> Result<Config> {
        let patterns_dir = PatternsDir::from_sources(
            self.patterns_dir.as_deref(),
            file_config.paths.patterns_dir.as_deref(),
        )?;
        log::debug!("patterns directory from {}", patterns_dir.display_name());

        let cache = if self.no_cache {
            CacheMode::Disabled
        } else {
            match self.cache_dir.as_ref().or(file_config.paths.cache_dir.as_ref()) {
                Some(dir) => CacheMode::Directory(dir.clone()),
                None => CacheMode::Disabled,
            }
        };

        let hyphenation = &file_config.hyphenation;
        let config = Config::builder()
            .language(self.language.as_deref().unwrap_or(&hyphenation.language))
            .threshold(self.threshold.unwrap_or(hyphenation.threshold))
            .hyphen(self.hyphen.as_deref().unwrap_or(&hyphenation.hyphen))
            .patterns_dir(patterns_dir.path())
            .cache(cache)
            .build()?;
        Ok(config)
    }

    fn process_documents(
        &self,
        hyphenator: &Hyphenator,
        documents: &[Document],
        quiet: bool,
    ) -> Result<Vec<Output>> {
        let progress = ProgressReporter::for_documents(documents.len(), quiet);

        let process = |document: &Document| -> Result<Output> {
            let text = match document {
                Document::File(path) => FileReader::read_text(path)?,
                Document::Inline(text) => text.clone(),
                Document::Stdin => FileReader::read_stream(io::stdin().lock())?,
            };
            let output = hyphenator
                .process(Input::from_text(text))
                .with_context(|| format!("Failed to hyphenate {}", document.name()))?;
            progress.document_done(&document.name(), &output.metadata);
            Ok(output)
        };

        let outputs = if self.parallel {
            let mut pool = rayon::ThreadPoolBuilder::new();
            if let Some(threads) = self.threads {
                pool = pool.num_threads(threads);
            }
            let pool = pool.build().context("Failed to start worker threads")?;
            pool.install(|| documents.par_iter().map(process).collect::<Result<Vec<_>>>())?
        } else {
            documents.iter().map(process).collect::<Result<Vec<_>>>()?
        };

        progress.finish();
        Ok(outputs)
    }
}
