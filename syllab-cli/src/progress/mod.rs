//! Progress reporting for multi-document runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use syllab_api::Metadata;

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}";

/// Running totals shown next to the bar. Shared by worker threads.
#[derive(Debug, Default)]
pub struct Totals {
    words: AtomicUsize,
    breaks: AtomicUsize,
}

impl Totals {
    fn add(&self, metadata: &Metadata) -> (usize, usize) {
        let words = self.words.fetch_add(metadata.word_count, Ordering::Relaxed);
        let breaks = self.breaks.fetch_add(metadata.break_count, Ordering::Relaxed);
        (words + metadata.word_count, breaks + metadata.break_count)
    }

    /// Words and breaks recorded so far.
    pub fn snapshot(&self) -> (usize, usize) {
        (
            self.words.load(Ordering::Relaxed),
            self.breaks.load(Ordering::Relaxed),
        )
    }
}

/// Progress over the documents of one `hyphenate` run.
///
/// A bar is only drawn for two or more documents and never with `--quiet`;
/// totals are kept either way and logged when the run finishes.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
    totals: Totals,
}

impl ProgressReporter {
    /// Reporter for `documents` inputs.
    pub fn for_documents(documents: usize, quiet: bool) -> Self {
        let bar = (!quiet && documents > 1).then(|| Self::bar(documents as u64));
        Self {
            bar,
            totals: Totals::default(),
        }
    }

    fn bar(length: u64) -> ProgressBar {
        let bar = ProgressBar::new(length);
        match ProgressStyle::default_bar().template(TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("##-")),
            Err(err) => log::debug!("progress template rejected: {err}"),
        }
        bar.enable_steady_tick(Duration::from_millis(100));
        bar
    }

    /// Whether a bar is being drawn
    pub fn is_active(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one hyphenated document.
    pub fn document_done(&self, name: &str, metadata: &Metadata) {
        let (words, breaks) = self.totals.add(metadata);
        log::debug!(
            "{name}: {} words, {} breaks",
            metadata.word_count,
            metadata.break_count
        );
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{words} words, {breaks} breaks"));
            bar.inc(1);
        }
    }

    /// Totals so far as `(words, breaks)`.
    pub fn totals(&self) -> (usize, usize) {
        self.totals.snapshot()
    }

    /// Close the bar and log the totals.
    pub fn finish(&self) {
        let (words, breaks) = self.totals();
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("{words} words, {breaks} breaks"));
        }
        log::info!("hyphenated {words} words with {breaks} breaks");
    }
}
