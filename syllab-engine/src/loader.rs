//! Language loading: warm path from the cache, cold path from the source
//!
//! ```text
//! load_language(id)
//!   → already loaded in this loader?  → shared table
//!   → cache entry valid?              → table
//!   → source has dictionary?          → parse → save to cache (warn on failure)
//!   → otherwise                       → LanguageNotFound
//! ```

use crate::cache::{NoCache, PatternCache};
use crate::error::{validate_language_id, EngineError, Result};
use crate::source::PatternSource;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use syllab_core::PatternTable;

/// Loads and shares pattern tables per language.
pub struct LanguageLoader {
    source: Arc<dyn PatternSource>,
    cache: Arc<dyn PatternCache>,
    loaded: RwLock<HashMap<String, Arc<PatternTable>>>,
}

impl std::fmt::Debug for LanguageLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let loaded: Vec<String> = self
            .loaded
            .read()
            .map(|loaded| loaded.keys().cloned().collect())
            .unwrap_or_default();
        f.debug_struct("LanguageLoader")
            .field("loaded", &loaded)
            .finish_non_exhaustive()
    }
}

impl LanguageLoader {
    /// Loader reading from `source` and caching into `cache`.
    pub fn new(source: Arc<dyn PatternSource>, cache: Arc<dyn PatternCache>) -> Self {
        Self {
            source,
            cache,
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// Loader that always parses from `source`.
    pub fn uncached(source: Arc<dyn PatternSource>) -> Self {
        Self::new(source, Arc::new(NoCache))
    }

    /// The pattern table for `language`.
    ///
    /// Tables are built at most once per loader; later calls return the same
    /// shared table.
    pub fn load_language(&self, language: &str) -> Result<Arc<PatternTable>> {
        validate_language_id(language)?;

        if let Some(table) = self
            .loaded
            .read()
            .ok()
            .and_then(|loaded| loaded.get(language).cloned())
        {
            return Ok(table);
        }

        let table = Arc::new(self.build(language)?);
        if let Ok(mut loaded) = self.loaded.write() {
            let entry = loaded
                .entry(language.to_string())
                .or_insert_with(|| Arc::clone(&table));
            return Ok(Arc::clone(entry));
        }
        Ok(table)
    }

    /// Languages the source can provide.
    pub fn available_languages(&self) -> Result<Vec<String>> {
        self.source.languages()
    }

    fn build(&self, language: &str) -> Result<PatternTable> {
        if let Some(table) = self.cache.load(language) {
            log::debug!("loaded patterns for '{language}' from cache");
            return Ok(table);
        }

        let Some(text) = self.source.read(language)? else {
            return Err(EngineError::LanguageNotFound {
                language: language.to_string(),
            });
        };

        let table = syllab_core::parse(&text.patterns, text.constraints.as_deref());
        log::info!(
            "parsed {} patterns and {} exceptions for '{language}'",
            table.pattern_count(),
            table.exception_count()
        );

        if let Err(err) = self.cache.save(language, &table) {
            log::warn!("could not cache patterns for '{language}': {err}");
        }
        Ok(table)
    }
}
