//! Decomposition of individual block entries
//!
//! A pattern entry such as `.hy3p` interleaves scores with units; it becomes
//! the folded key `.hyp` and the scores `[0, 0, 0, 3, 0]`. An exception entry
//! such as `as-so-ciate` becomes the key `associate` and keeps its marked form.

use crate::unit::{self, HYPHEN};
use crate::table::Scores;
use smallvec::smallvec;

/// Split a pattern entry into its folded key and score sequence.
///
/// Each digit feeds the score slot in front of the next unit (adjacent
/// digits accumulate as one decimal number, saturating at 255). Every
/// non-digit unit opens a fresh slot that stays 0 unless a digit follows.
/// Returns `None` for entries without any non-digit unit.
pub fn parse_pattern(entry: &str) -> Option<(String, Scores)> {
    let mut key_units = Vec::with_capacity(entry.len());
    let mut scores: Scores = smallvec![0];
    for piece in unit::units(entry) {
        match unit::digit_value(piece) {
            Some(digit) => {
                if let Some(slot) = scores.last_mut() {
                    *slot = slot.saturating_mul(10).saturating_add(digit);
                }
            }
            None => {
                key_units.push(piece);
                scores.push(0);
            }
        }
    }
    if key_units.is_empty() {
        return None;
    }
    Some((unit::fold_units(&key_units).concat(), scores))
}

/// Split an exception entry into its folded lookup key and marked form.
///
/// Valid entries consist of letters, marks and hyphens, starting with a
/// letter and ending with a letter or mark.
pub fn parse_exception(entry: &str) -> Option<(String, String)> {
    let units = unit::units(entry);
    let (first, last) = (units.first()?, units.last()?);
    if !unit::is_letter_unit(first) || !unit::is_word_unit(last) {
        return None;
    }
    let mut key_units = Vec::with_capacity(units.len());
    for &piece in &units {
        if piece == HYPHEN {
            continue;
        }
        if !unit::is_word_unit(piece) {
            return None;
        }
        key_units.push(piece);
    }
    Some((unit::fold_units(&key_units).concat(), entry.to_string()))
}
