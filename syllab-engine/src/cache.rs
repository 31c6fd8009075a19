//! Persistent and in-memory pattern-table caches
//!
//! A cache entry is only ever a shortcut: any entry that cannot be read or
//! does not carry every table field is reported as absent, and the loader
//! falls back to parsing the source.

use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use syllab_core::PatternTable;

/// Storage for parsed pattern tables, keyed by language.
pub trait PatternCache: Send + Sync {
    /// Fetch a valid table for `language`, if one is stored.
    fn load(&self, language: &str) -> Option<PatternTable>;

    /// Store `table` for `language`, replacing any previous entry.
    fn save(&self, language: &str, table: &PatternTable) -> Result<()>;
}

/// One JSON document per language, `<dir>/<language>.json`.
///
/// Entries are written to a temporary file and renamed into place, so
/// concurrent writers of the same language leave one complete entry.
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    dir: PathBuf,
}

impl JsonFileCache {
    /// Cache storing entries in `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry for `language`.
    pub fn entry_path(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{language}.json"))
    }

    fn write_entry(&self, path: &Path, json: &str) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut temp = path.as_os_str().to_owned();
        temp.push(format!(".tmp{}", std::process::id()));
        let temp = PathBuf::from(temp);
        fs::write(&temp, json)?;
        fs::rename(&temp, path).inspect_err(|_| {
            let _ = fs::remove_file(&temp);
        })
    }
}

impl PatternCache for JsonFileCache {
    fn load(&self, language: &str) -> Option<PatternTable> {
        let path = self.entry_path(language);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                log::warn!("cannot read cache entry {}: {err}", path.display());
                return None;
            }
        };
        match serde_json::from_str(&json) {
            Ok(table) => Some(table),
            Err(err) => {
                log::warn!("ignoring invalid cache entry {}: {err}", path.display());
                None
            }
        }
    }

    fn save(&self, language: &str, table: &PatternTable) -> Result<()> {
        let json = serde_json::to_string(table)?;
        let path = self.entry_path(language);
        self.write_entry(&path, &json)
            .map_err(|err| EngineError::CacheWrite {
                path: path.clone(),
                reason: err.to_string(),
            })?;
        log::debug!("cached patterns for '{language}' at {}", path.display());
        Ok(())
    }
}

/// Process-local cache.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, PatternTable>>,
}

impl MemoryCache {
    /// Empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map_or(0, |entries| entries.len())
    }

    /// Whether no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PatternCache for MemoryCache {
    fn load(&self, language: &str) -> Option<PatternTable> {
        self.entries.read().ok()?.get(language).cloned()
    }

    fn save(&self, language: &str, table: &PatternTable) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| EngineError::CacheWrite {
                path: PathBuf::from(language),
                reason: "memory cache lock poisoned".to_string(),
            })?;
        entries.insert(language.to_string(), table.clone());
        Ok(())
    }
}

/// Cache that stores nothing; every load parses the source.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl PatternCache for NoCache {
    fn load(&self, _language: &str) -> Option<PatternTable> {
        None
    }

    fn save(&self, _language: &str, _table: &PatternTable) -> Result<()> {
        Ok(())
    }
}
