//! Language loading and pattern-table caching
//!
//! This crate sits between the pure algorithms of `syllab-core` and the
//! outside world: it finds dictionaries ([`PatternSource`]), keeps parsed
//! tables around ([`PatternCache`]), and ties both together in
//! [`LanguageLoader`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use syllab_engine::{DirectorySource, JsonFileCache, LanguageLoader};
//!
//! let loader = LanguageLoader::new(
//!     Arc::new(DirectorySource::new("/usr/share/hyph-utf8")),
//!     Arc::new(JsonFileCache::new("/tmp/syllab-cache")),
//! );
//! let table = loader.load_language("en-us")?;
//! println!("{} patterns", table.pattern_count());
//! # Ok::<(), syllab_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod loader;
pub mod source;

pub use cache::{JsonFileCache, MemoryCache, NoCache, PatternCache};
pub use error::{EngineError, Result};
pub use loader::LanguageLoader;
pub use source::{DirectorySource, PatternSource, SourceText, StaticSource};

// Re-export from core for convenience
pub use syllab_core::{PatternTable, Threshold};
