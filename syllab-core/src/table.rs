//! Structured pattern table
//!
//! A [`PatternTable`] is the parsed form of one language's hyphenation
//! dictionary: Liang patterns with their score sequences, the exception
//! dictionary, and the margins that must stay unbroken at each end of a
//! word. It is built once, then only read.
//!
//! The serialized form is the cache record. Every field is required, so a
//! record missing any of them fails to deserialize and is treated as absent.

use crate::unit::{self, HYPHEN};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Default minimum number of units kept together at the start of a word.
pub const DEFAULT_LEFT_MIN_BREAK: usize = 2;

/// Default minimum number of units kept together at the end of a word.
pub const DEFAULT_RIGHT_MIN_BREAK: usize = 2;

/// Score sequence of one pattern; one entry per boundary around its units.
pub type Scores = SmallVec<[u8; 8]>;

/// Parsed hyphenation patterns, exceptions and margins for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternTable {
    patterns: BTreeMap<String, Scores>,
    max_pattern_length: usize,
    exceptions: BTreeMap<String, String>,
    min_exception_length: usize,
    left_min_break: usize,
    right_min_break: usize,
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternTable {
    /// Empty table with default margins.
    pub fn new() -> Self {
        Self {
            patterns: BTreeMap::new(),
            max_pattern_length: 0,
            exceptions: BTreeMap::new(),
            min_exception_length: usize::MAX,
            left_min_break: DEFAULT_LEFT_MIN_BREAK,
            right_min_break: DEFAULT_RIGHT_MIN_BREAK,
        }
    }

    /// Record a pattern. `key` must already be folded and `scores` must hold
    /// one more entry than `key` has units. A repeated key replaces the
    /// earlier entry.
    pub fn insert_pattern(&mut self, key: String, scores: Scores) {
        debug_assert_eq!(unit::unit_count(&key) + 1, scores.len());
        let length = scores.len().saturating_sub(1);
        if length > self.max_pattern_length {
            self.max_pattern_length = length;
        }
        self.patterns.insert(key, scores);
    }

    /// Record an exception. `key` is the folded word without hyphens,
    /// `marked` the hyphen-marked form as written in the dictionary.
    pub fn insert_exception(&mut self, key: String, marked: String) {
        let length = unit::unit_count(&key);
        if length < self.min_exception_length {
            self.min_exception_length = length;
        }
        self.exceptions.insert(key, marked);
    }

    /// Replace both margins.
    pub fn set_margins(&mut self, left: usize, right: usize) {
        self.left_min_break = left;
        self.right_min_break = right;
    }

    /// Scores for a folded pattern key.
    #[inline]
    pub fn scores(&self, key: &str) -> Option<&[u8]> {
        self.patterns.get(key).map(|scores| scores.as_slice())
    }

    /// Hyphen-marked form for a folded word.
    #[inline]
    pub fn exception(&self, key: &str) -> Option<&str> {
        self.exceptions.get(key).map(String::as_str)
    }

    /// Unit offsets of the recorded breaks for a folded word.
    ///
    /// For `"as-so-ciate"` this is `[2, 4]`.
    pub fn exception_breaks(&self, key: &str) -> Option<Vec<usize>> {
        let marked = self.exception(key)?;
        let mut breaks = Vec::new();
        let mut offset = 0;
        for piece in unit::units(marked) {
            if piece == HYPHEN {
                if breaks.last() != Some(&offset) {
                    breaks.push(offset);
                }
            } else {
                offset += 1;
            }
        }
        Some(breaks)
    }

    /// Iterate over all patterns in key order.
    pub fn patterns(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.patterns
            .iter()
            .map(|(key, scores)| (key.as_str(), scores.as_slice()))
    }

    /// Iterate over all exceptions in key order.
    pub fn exceptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.exceptions
            .iter()
            .map(|(key, marked)| (key.as_str(), marked.as_str()))
    }

    /// Length in units of the longest pattern key.
    #[inline]
    pub fn max_pattern_length(&self) -> usize {
        self.max_pattern_length
    }

    /// Length in units of the shortest exception key (`usize::MAX` if none).
    #[inline]
    pub fn min_exception_length(&self) -> usize {
        self.min_exception_length
    }

    /// Units that must stay together at the start of a word.
    #[inline]
    pub fn left_min_break(&self) -> usize {
        self.left_min_break
    }

    /// Units that must stay together at the end of a word.
    #[inline]
    pub fn right_min_break(&self) -> usize {
        self.right_min_break
    }

    /// Number of patterns.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Number of exceptions.
    pub fn exception_count(&self) -> usize {
        self.exceptions.len()
    }

    /// True if the table holds neither patterns nor exceptions.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.exceptions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_new_table_defaults() {
        let table = PatternTable::new();
        assert!(table.is_empty());
        assert_eq!(table.max_pattern_length(), 0);
        assert_eq!(table.min_exception_length(), usize::MAX);
        assert_eq!(table.left_min_break(), 2);
        assert_eq!(table.right_min_break(), 2);
    }

    #[test]
    fn test_insert_pattern_tracks_longest_key() {
        let mut table = PatternTable::new();
        table.insert_pattern("hyp".to_string(), smallvec![0, 0, 3, 0]);
        table.insert_pattern("ab".to_string(), smallvec![0, 1, 0]);
        table.insert_pattern("été".to_string(), smallvec![0, 0, 1, 0]);
        assert_eq!(table.max_pattern_length(), 3);
        assert_eq!(table.scores("hyp"), Some(&[0, 0, 3, 0][..]));
        assert_eq!(table.scores("hy"), None);
        assert_eq!(table.pattern_count(), 3);
    }

    #[test]
    fn test_repeated_pattern_replaces_scores() {
        let mut table = PatternTable::new();
        table.insert_pattern("ab".to_string(), smallvec![0, 1, 0]);
        table.insert_pattern("ab".to_string(), smallvec![0, 4, 0]);
        assert_eq!(table.scores("ab"), Some(&[0, 4, 0][..]));
        assert_eq!(table.pattern_count(), 1);
    }

    #[test]
    fn test_insert_exception_tracks_shortest_key() {
        let mut table = PatternTable::new();
        table.insert_exception("associate".to_string(), "as-so-ciate".to_string());
        assert_eq!(table.min_exception_length(), 9);
        table.insert_exception("table".to_string(), "ta-ble".to_string());
        assert_eq!(table.min_exception_length(), 5);
        assert_eq!(table.exception("table"), Some("ta-ble"));
        assert_eq!(table.exception_breaks("associate"), Some(vec![2, 4]));
        assert_eq!(table.exception_breaks("missing"), None);
    }

    #[test]
    fn test_exception_breaks_collapse_double_hyphens() {
        let mut table = PatternTable::new();
        table.insert_exception("abcd".to_string(), "ab--cd".to_string());
        assert_eq!(table.exception_breaks("abcd"), Some(vec![2]));
    }

    #[test]
    fn test_serialized_field_names() {
        let mut table = PatternTable::new();
        table.insert_pattern("ab".to_string(), smallvec![0, 1, 0]);
        table.insert_exception("table".to_string(), "ta-ble".to_string());
        let json = serde_json::to_value(&table).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "exceptions",
                "leftMinBreak",
                "maxPatternLength",
                "minExceptionLength",
                "patterns",
                "rightMinBreak"
            ]
        );
        assert_eq!(json["patterns"]["ab"], serde_json::json!([0, 1, 0]));
    }

    #[test]
    fn test_record_missing_field_is_rejected() {
        let json = r#"{
            "patterns": {"ab": [0, 1, 0]},
            "maxPatternLength": 2,
            "exceptions": {},
            "minExceptionLength": 3,
            "leftMinBreak": 2
        }"#;
        assert!(serde_json::from_str::<PatternTable>(json).is_err());
    }

    #[test]
    fn test_serde_round_trip_preserves_equality() {
        let mut table = PatternTable::new();
        table.insert_pattern(".ex".to_string(), smallvec![0, 0, 0, 5]);
        table.insert_exception("project".to_string(), "project".to_string());
        table.set_margins(2, 3);
        let json = serde_json::to_string(&table).unwrap();
        let restored: PatternTable = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, table);
    }
}
