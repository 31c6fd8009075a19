//! Margin constraints companion source
//!
//! The companion source carries two unsigned integers: the left and the
//! right minimum break margins, in that order. Surrounding words are
//! ignored, so both `2 3` and `left 2\nright 3` are accepted.

use super::token::strip_comment;
use crate::table::{DEFAULT_LEFT_MIN_BREAK, DEFAULT_RIGHT_MIN_BREAK};

/// Read `(left, right)` margins, falling back to the defaults when fewer
/// than two integers are present.
pub fn parse_constraints(source: Option<&str>) -> (usize, usize) {
    let defaults = (DEFAULT_LEFT_MIN_BREAK, DEFAULT_RIGHT_MIN_BREAK);
    let Some(source) = source else {
        return defaults;
    };

    let mut numbers = source
        .lines()
        .map(strip_comment)
        .flat_map(|line| line.split(|ch: char| !ch.is_ascii_digit()))
        .filter(|run| !run.is_empty())
        .filter_map(|run| run.parse::<usize>().ok());

    match (numbers.next(), numbers.next()) {
        (Some(left), Some(right)) => (left, right),
        _ => {
            log::debug!("constraints source has fewer than two integers, using defaults");
            defaults
        }
    }
}
