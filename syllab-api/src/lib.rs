//! Public API for syllab syllable segmentation
//!
//! This crate wraps pattern loading and the segmentation algorithm behind
//! [`Hyphenator`], which splits words and running text and joins the
//! fragments with a configurable hyphen.
//!
//! ```no_run
//! use syllab_api::{Config, Hyphenator};
//!
//! let config = Config::builder()
//!     .language("en-us")
//!     .patterns_dir("/usr/share/hyph-utf8")
//!     .build()?;
//! let hyphenator = Hyphenator::with_config(config)?;
//! assert_eq!(hyphenator.hyphenate_word("Inexplicable"), "In-ex-plic-a-ble");
//! # Ok::<(), syllab_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod hyphen;
pub mod text;

use error::Result;
use std::sync::Arc;
use std::time::Instant;
use syllab_core::{PatternTable, Segmenter};
use syllab_engine::{
    DirectorySource, JsonFileCache, LanguageLoader, MemoryCache, NoCache, PatternCache,
};

// Re-export key types
pub use config::{CacheMode, Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, WordSplit};
pub use error::ApiError;
pub use hyphen::{hyphen_from_name, EntityHyphen, Hyphen, SoftHyphen, TextHyphen};
pub use syllab_core::Threshold;
pub use text::TextSplitter;

/// Main entry point for hyphenation
///
/// Holds one language's pattern table plus the policy used to split and
/// join. Cheap to share across threads; every operation takes `&self`.
#[derive(Debug)]
pub struct Hyphenator {
    language: String,
    table: Arc<PatternTable>,
    threshold: Threshold,
    margins: Option<(usize, usize)>,
    hyphen: Box<dyn Hyphen>,
    splitter: TextSplitter,
}

impl Hyphenator {
    /// Create a hyphenator over an already built table with default settings
    pub fn from_table(language: impl Into<String>, table: Arc<PatternTable>) -> Result<Self> {
        Ok(Self {
            language: language.into(),
            table,
            threshold: Threshold::default(),
            margins: None,
            hyphen: Box::new(TextHyphen::default()),
            splitter: TextSplitter::new()?,
        })
    }

    /// Create a hyphenator from configuration, loading patterns from the
    /// configured directory
    pub fn with_config(config: Config) -> Result<Self> {
        let Some(dir) = config.patterns_dir() else {
            return Err(ApiError::Config(
                "a patterns directory is required".to_string(),
            ));
        };

        let cache: Arc<dyn PatternCache> = match config.cache() {
            CacheMode::Disabled => Arc::new(NoCache),
            CacheMode::Memory => Arc::new(MemoryCache::new()),
            CacheMode::Directory(path) => Arc::new(JsonFileCache::new(path)),
        };
        let loader = LanguageLoader::new(Arc::new(DirectorySource::new(dir)), cache);
        Self::with_loader(&loader, &config)
    }

    /// Create a hyphenator from configuration, loading patterns through an
    /// existing loader
    pub fn with_loader(loader: &LanguageLoader, config: &Config) -> Result<Self> {
        let table = loader.load_language(config.language())?;
        Ok(Self {
            language: config.language().to_string(),
            table,
            threshold: config.threshold(),
            margins: config.margins(),
            hyphen: hyphen_from_name(config.hyphen()),
            splitter: TextSplitter::with_pattern(config.word_pattern())?,
        })
    }

    /// Language identifier of the loaded table
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The pattern table in use
    pub fn table(&self) -> &Arc<PatternTable> {
        &self.table
    }

    /// Current threshold
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Change the threshold
    pub fn set_threshold(&mut self, threshold: Threshold) {
        self.threshold = threshold;
    }

    /// Current joiner
    pub fn hyphen(&self) -> &dyn Hyphen {
        self.hyphen.as_ref()
    }

    /// Change the joiner
    pub fn set_hyphen(&mut self, hyphen: impl Hyphen + 'static) {
        self.hyphen = Box::new(hyphen);
    }

    /// Override the table's margins; `None` restores them
    pub fn set_margins(&mut self, margins: Option<(usize, usize)>) {
        self.margins = margins;
    }

    /// Segmenter carrying the current threshold and margins
    pub fn segmenter(&self) -> Segmenter<'_> {
        let segmenter = Segmenter::new(&self.table, self.threshold);
        match self.margins {
            Some((left, right)) => segmenter.with_margins(left, right),
            None => segmenter,
        }
    }

    /// Split one word into syllable fragments
    pub fn split_word(&self, word: &str) -> Vec<String> {
        self.segmenter().segment(word)
    }

    /// Split running text; parts concatenate back to `text`
    pub fn split_text(&self, text: &str) -> Vec<String> {
        let segmenter = self.segmenter();
        self.splitter.split(text, |word| segmenter.segment(word))
    }

    /// Word with hyphens inserted at every break
    pub fn hyphenate_word(&self, word: &str) -> String {
        self.hyphen.join(&self.split_word(word))
    }

    /// Text with hyphens inserted at every break inside its words
    pub fn hyphenate_text(&self, text: &str) -> String {
        self.hyphen.join(&self.split_text(text))
    }

    /// Split many words across the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn split_words_par<S>(&self, words: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let segmenter = self.segmenter();
        words
            .par_iter()
            .map(|word| segmenter.segment(word.as_ref()))
            .collect()
    }

    /// Process input and return the hyphenated text with per-word detail
    pub fn process(&self, input: Input) -> Result<Output> {
        let start = Instant::now();
        let text = input.read_text()?;

        let segmenter = self.segmenter();
        let mut words = Vec::new();
        let parts = self.splitter.split(&text, |word| {
            let fragments = segmenter.segment(word);
            words.push(WordSplit {
                word: word.to_string(),
                fragments: fragments.clone(),
            });
            fragments
        });
        let break_count = parts.len() - 1;
        log::debug!(
            "hyphenated {} words with {break_count} breaks",
            words.len()
        );

        let metadata = Metadata {
            language: self.language.clone(),
            threshold: self.threshold.to_string(),
            word_count: words.len(),
            break_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output {
            hyphenated: self.hyphen.join(&parts),
            words,
            metadata,
        })
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }
}

// Convenience functions

/// Split `word` against `table`, optionally overriding the table's margins
pub fn segment_word(
    word: &str,
    table: &PatternTable,
    threshold: Threshold,
    margins: Option<(usize, usize)>,
) -> Vec<String> {
    match margins {
        Some((left, right)) => {
            syllab_core::segment_with_margins(word, table, threshold, left, right)
        }
        None => syllab_core::segment(word, table, threshold),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllab_engine::StaticSource;

    const PATTERNS: &str = "\\patterns{ hy3p 2ph 1na n2at }\n\\hyphenation{ ta-ble }";

    fn hyphenator() -> Hyphenator {
        let table = Arc::new(syllab_core::parse(PATTERNS, None));
        Hyphenator::from_table("xx", table).unwrap()
    }

    #[test]
    fn test_split_and_hyphenate_word() {
        let hyphenator = hyphenator();
        assert_eq!(hyphenator.split_word("Hyper"), vec!["Hy", "per"]);
        assert_eq!(hyphenator.hyphenate_word("table"), "ta-ble");
    }

    #[test]
    fn test_set_hyphen() {
        let mut hyphenator = hyphenator();
        hyphenator.set_hyphen(SoftHyphen);
        assert_eq!(hyphenator.hyphenate_word("Hyper"), "Hy\u{AD}per");
        assert_eq!(hyphenator.hyphen().marker(), "\u{AD}");
    }

    #[test]
    fn test_set_threshold() {
        let mut hyphenator = hyphenator();
        hyphenator.set_threshold(Threshold::Least);
        assert_eq!(hyphenator.threshold(), Threshold::Least);
        assert_eq!(hyphenator.hyphenate_word("Hyper"), "Hyper");
    }

    #[test]
    fn test_margins_override() {
        let mut hyphenator = hyphenator();
        hyphenator.set_margins(Some((3, 2)));
        assert_eq!(hyphenator.hyphenate_word("Hyper"), "Hyper");
        hyphenator.set_margins(None);
        assert_eq!(hyphenator.hyphenate_word("Hyper"), "Hy-per");
    }

    #[test]
    fn test_hyphenate_text() {
        assert_eq!(
            hyphenator().hyphenate_text("A hyper table."),
            "A hy-per ta-ble."
        );
    }

    #[test]
    fn test_process_reports_words() {
        let output = hyphenator().process_text("Hyper, table!").unwrap();
        assert_eq!(output.hyphenated, "Hy-per, ta-ble!");
        assert_eq!(output.words.len(), 2);
        assert_eq!(output.words[0].fragments, vec!["Hy", "per"]);
        assert_eq!(output.metadata.word_count, 2);
        assert_eq!(output.metadata.break_count, 2);
        assert_eq!(output.metadata.language, "xx");
        assert_eq!(output.metadata.threshold, "average");
    }

    #[test]
    fn test_with_loader() {
        let loader =
            LanguageLoader::uncached(Arc::new(StaticSource::new().with_language("xx", PATTERNS, None)));
        let config = Config::builder()
            .language("xx")
            .hyphen("entity")
            .build()
            .unwrap();
        let hyphenator = Hyphenator::with_loader(&loader, &config).unwrap();
        assert_eq!(hyphenator.hyphenate_word("hyper"), "hy&shy;per");
    }

    #[test]
    fn test_with_config_requires_patterns_dir() {
        let err = Hyphenator::with_config(Config::default()).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_segment_word() {
        let table = syllab_core::parse(PATTERNS, None);
        assert_eq!(
            segment_word("Hyper", &table, Threshold::Average, None),
            vec!["Hy", "per"]
        );
        assert_eq!(
            segment_word("Hyper", &table, Threshold::Average, Some((3, 1))),
            vec!["Hyper"]
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_split_words_par_matches_sequential() {
        let hyphenator = hyphenator();
        let words = ["Hyper", "table", "a", "hyphen"];
        let sequential: Vec<_> = words.iter().map(|w| hyphenator.split_word(w)).collect();
        assert_eq!(hyphenator.split_words_par(&words[..]), sequential);
    }

    #[test]
    fn test_hyphenator_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Hyphenator>();
    }
}
