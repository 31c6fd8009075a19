//! Syllable segmentation by score maximization
//!
//! # Algorithm
//!
//! ```text
//! word → too short for both margins?     → [word]
//!      → fold units → exception entry?   → split at recorded hyphens
//!      → ".word." → probe every substring up to the longest pattern
//!      → keep the maximum score per inter-unit position
//!      → odd score ≥ threshold, outside the margins = break
//!      → cut the original units at the breaks
//! ```
//!
//! Offsets are unit offsets into the word: a break at offset `k`
//! means a new fragment starts at the `k`-th unit. Case and the exact
//! characters of the input are always preserved in the output.

use crate::unit::{self, WORD_BOUNDARY};
use crate::table::PatternTable;
use crate::threshold::Threshold;

/// Segments words against one pattern table.
///
/// Cheap to copy; holds only a shared reference to the table, so one table
/// can serve any number of segmenters on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'t> {
    table: &'t PatternTable,
    threshold: Threshold,
    left_min_break: usize,
    right_min_break: usize,
}

impl<'t> Segmenter<'t> {
    /// Segmenter using the table's own margins.
    pub fn new(table: &'t PatternTable, threshold: Threshold) -> Self {
        Self {
            table,
            threshold,
            left_min_break: table.left_min_break(),
            right_min_break: table.right_min_break(),
        }
    }

    /// Override the margins stored in the table.
    #[must_use]
    pub fn with_margins(mut self, left: usize, right: usize) -> Self {
        self.left_min_break = left;
        self.right_min_break = right;
        self
    }

    /// Threshold in effect.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Margins in effect as `(left, right)`.
    pub fn margins(&self) -> (usize, usize) {
        (self.left_min_break, self.right_min_break)
    }

    /// Split `word` into syllable fragments.
    ///
    /// The fragments always concatenate back to `word`. The empty word
    /// yields a single empty fragment.
    pub fn segment(&self, word: &str) -> Vec<String> {
        let units = unit::units(word);
        let breaks = self.breaks_for_units(&units);
        unit::cut(&units, &breaks)
    }

    /// Unit offsets at which `word` may be broken, in ascending order.
    pub fn break_offsets(&self, word: &str) -> Vec<usize> {
        self.breaks_for_units(&unit::units(word))
    }

    fn breaks_for_units(&self, units: &[&str]) -> Vec<usize> {
        let length = units.len();
        if length < self.left_min_break + self.right_min_break {
            return Vec::new();
        }

        let folded = unit::fold_units(units);

        if length >= self.table.min_exception_length() {
            if let Some(breaks) = self.table.exception_breaks(&folded.concat()) {
                return breaks
                    .into_iter()
                    .filter(|&offset| offset > 0 && offset < length)
                    .collect();
            }
        }

        let best = self.maximize(&folded);
        let first = self.left_min_break.max(1);
        let last = length - self.right_min_break;
        (first..=last)
            .filter(|&offset| offset < length)
            .filter(|&offset| {
                // best[i] is the score in front of text unit i; word offset k
                // sits in front of text unit k + 1 because of the leading marker.
                best[offset + 1].is_some_and(|score| self.threshold.accepts(score))
            })
            .collect()
    }

    /// Merge the scores of every pattern hit over `.word.`.
    ///
    /// Returns one slot per boundary of the wrapped text; `None` means no
    /// pattern ever scored that position.
    fn maximize(&self, folded: &[String]) -> Vec<Option<u8>> {
        let text_length = folded.len() + 2;

        let mut best: Vec<Option<u8>> = vec![None; text_length + 1];
        let end = text_length - self.right_min_break.min(text_length);
        let mut probe = String::new();

        for start in 0..end {
            probe.clear();
            let longest = self.table.max_pattern_length().min(text_length - start);
            for length in 1..=longest {
                probe.push_str(wrapped_unit(folded, start + length - 1));
                let Some(scores) = self.table.scores(&probe) else {
                    continue;
                };
                if scores.len() != length + 1 {
                    continue;
                }
                for (offset, &score) in scores.iter().enumerate() {
                    let slot = &mut best[start + offset];
                    if slot.map_or(true, |current| score > current) {
                        *slot = Some(score);
                    }
                }
            }
        }

        best
    }
}

/// Unit `index` of the word wrapped in boundary markers.
#[inline]
fn wrapped_unit(folded: &[String], index: usize) -> &str {
    if index == 0 || index == folded.len() + 1 {
        WORD_BOUNDARY
    } else {
        &folded[index - 1]
    }
}

/// Split `word` using the table's margins.
pub fn segment(word: &str, table: &PatternTable, threshold: Threshold) -> Vec<String> {
    Segmenter::new(table, threshold).segment(word)
}

/// Split `word` with explicit margins, ignoring the table's.
pub fn segment_with_margins(
    word: &str,
    table: &PatternTable,
    threshold: Threshold,
    left_min_break: usize,
    right_min_break: usize,
) -> Vec<String> {
    Segmenter::new(table, threshold)
        .with_margins(left_min_break, right_min_break)
        .segment(word)
}
