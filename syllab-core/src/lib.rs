//! Liang pattern hyphenation: parsing and syllable segmentation
//!
//! This crate holds the deterministic core of syllab. It turns a language's
//! TeX hyphenation dictionary into an immutable [`PatternTable`] and splits
//! words into syllable fragments against that table. It performs no I/O;
//! locating dictionaries and caching parsed tables live in `syllab-engine`.
//!
//! # Architecture
//!
//! - **Parser** ([`parser`]): command/brace state machine over the
//!   `\patterns{}` and `\hyphenation{}` blocks of a pattern file
//! - **Table** ([`table`]): patterns, exceptions and margins; the
//!   serialized form doubles as the cache record
//! - **Segmenter** ([`segmenter`]): score maximization and fragment assembly
//! - **Threshold** ([`threshold`]): how aggressively breaks are accepted
//!
//! # Example
//!
//! ```rust
//! use syllab_core::{parse, Segmenter, Threshold};
//!
//! let table = parse(r"\patterns{ hy3p 1na n2at }", None);
//! let segmenter = Segmenter::new(&table, Threshold::Average);
//!
//! assert_eq!(segmenter.segment("Hyper"), vec!["Hy", "per"]);
//! ```

pub mod error;
pub mod parser;
pub mod segmenter;
pub mod table;
pub mod threshold;
pub mod unit;

pub use error::{CoreError, Result};
pub use parser::parse;
pub use segmenter::{segment, segment_with_margins, Segmenter};
pub use table::{PatternTable, Scores, DEFAULT_LEFT_MIN_BREAK, DEFAULT_RIGHT_MIN_BREAK};
pub use threshold::Threshold;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PatternTable>();
        assert_send_sync::<Segmenter<'static>>();
    }

    #[test]
    fn test_root_exports() {
        let table = parse(r"\patterns{ a1b }", Some("1 1"));
        assert_eq!(segment("ab", &table, Threshold::Most), vec!["a", "b"]);
        assert_eq!(
            segment_with_margins("ab", &table, Threshold::Most, 2, 2),
            vec!["ab"]
        );
    }
}
