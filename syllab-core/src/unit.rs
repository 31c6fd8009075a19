//! Text units and lookup folding
//!
//! Every length, offset and margin in this crate counts code points of the
//! canonically composed text. A letter followed by combining marks that
//! compose into one precomposed character (`e` + U+0301 → `é`) is a single
//! unit however the input spells it. Marks without a precomposed form and
//! spacing signs such as Devanagari vowel signs are units of their own, so
//! `2ा` is a score followed by a vowel sign and `ना` is two units.
//!
//! Lookup keys are folded per unit (NFC, then lowercase) while the original
//! units stay available for reassembling output. Greek capital sigma folds
//! to the final form `ς` at the end of a word.

use unicode_normalization::char::{canonical_combining_class, is_combining_mark};
use unicode_normalization::UnicodeNormalization;

/// Boundary marker wrapped around a word before pattern probing.
pub const WORD_BOUNDARY: &str = ".";

/// Hyphen marking an accepted break inside an exception entry.
pub const HYPHEN: &str = "-";

const CAPITAL_SIGMA: &str = "Σ";
const FINAL_SIGMA: &str = "ς";

/// Split text into units.
pub fn units(text: &str) -> Vec<&str> {
    let mut units = Vec::with_capacity(text.len());
    let mut start = 0;
    for (index, ch) in text.char_indices() {
        if index > start && canonical_combining_class(ch) == 0 {
            push_run(&text[start..index], &mut units);
            start = index;
        }
    }
    if start < text.len() {
        push_run(&text[start..], &mut units);
    }
    units
}

/// A run is one starter and the non-starters after it.
fn push_run<'a>(run: &'a str, units: &mut Vec<&'a str>) {
    if run.chars().nth(1).is_none() || run.nfc().nth(1).is_none() {
        units.push(run);
        return;
    }
    units.extend(
        run.char_indices()
            .map(|(index, ch)| &run[index..index + ch.len_utf8()]),
    );
}

/// Number of units in `text`.
#[inline]
pub fn unit_count(text: &str) -> usize {
    units(text).len()
}

/// Fold one unit for table lookup, without word context.
pub fn fold_unit(unit: &str) -> String {
    if unit.is_ascii() {
        return unit.to_ascii_lowercase();
    }
    unit.nfc().collect::<String>().to_lowercase()
}

/// Fold the units of one word, keeping one folded string per unit.
pub fn fold_units(units: &[&str]) -> Vec<String> {
    units
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            if *unit == CAPITAL_SIGMA && ends_word(units, index) {
                FINAL_SIGMA.to_string()
            } else {
                fold_unit(unit)
            }
        })
        .collect()
}

/// Fold a whole word.
pub fn fold(text: &str) -> String {
    fold_units(&units(text)).concat()
}

/// Final sigma context: a letter before `index`, none after it.
fn ends_word(units: &[&str], index: usize) -> bool {
    let letter_before = units[..index]
        .iter()
        .rev()
        .find(|unit| !is_mark_unit(unit))
        .is_some_and(|unit| is_letter_unit(unit));
    let letter_after = units[index + 1..]
        .iter()
        .find(|unit| !is_mark_unit(unit))
        .is_some_and(|unit| is_letter_unit(unit));
    letter_before && !letter_after
}

/// True if the unit starts with a letter (combining marks may follow).
#[inline]
pub fn is_letter_unit(unit: &str) -> bool {
    unit.chars().next().is_some_and(char::is_alphabetic)
}

/// True if the unit is a combining mark or a vowel sign.
#[inline]
pub fn is_mark_unit(unit: &str) -> bool {
    unit.chars().next().is_some_and(is_combining_mark)
}

/// True if the unit can appear inside a word: a letter or a mark.
#[inline]
pub fn is_word_unit(unit: &str) -> bool {
    is_letter_unit(unit) || is_mark_unit(unit)
}

/// Decimal value of a unit that is a single ASCII digit.
#[inline]
pub fn digit_value(unit: &str) -> Option<u8> {
    match unit.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

/// Rebuild fragments from `units` cut before each offset in `breaks`.
///
/// Offsets outside `1..units.len()` and non-increasing offsets are ignored,
/// so the concatenation of the result always equals the joined units.
pub fn cut(units: &[&str], breaks: &[usize]) -> Vec<String> {
    let mut fragments = Vec::with_capacity(breaks.len() + 1);
    let mut start = 0;
    for &offset in breaks {
        if offset > start && offset < units.len() {
            fragments.push(units[start..offset].concat());
            start = offset;
        }
    }
    fragments.push(units[start..].concat());
    fragments
}
