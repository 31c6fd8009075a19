//! Pattern-file parser
//!
//! Turns a language's raw TeX hyphenation dictionary into a
//! [`PatternTable`]. Parsing is best effort: malformed entries are skipped
//! and parsing never fails, since dictionaries are externally curated and
//! assumed mostly well formed.
//!
//! ```rust
//! use syllab_core::parser::parse;
//!
//! let source = r"
//! \patterns{ % English
//! hy3p
//! .ex5am
//! }
//! \hyphenation{ ta-ble }
//! ";
//! let table = parse(source, Some("2 3"));
//! assert_eq!(table.scores("hyp"), Some(&[0, 0, 3, 0][..]));
//! assert_eq!(table.exception("table"), Some("ta-ble"));
//! assert_eq!(table.right_min_break(), 3);
//! ```

pub mod constraints;
pub mod entry;
pub mod state;
pub mod token;

pub use constraints::parse_constraints;
pub use entry::{parse_exception, parse_pattern};
pub use state::{Command, ParserState};
pub use token::{Token, Tokens};

use crate::table::PatternTable;

/// Parse a pattern dictionary and its optional margin constraints.
pub fn parse(pattern_source: &str, constraints_source: Option<&str>) -> PatternTable {
    let mut table = PatternTable::new();
    let mut state = ParserState::Outside;

    for line in pattern_source.lines() {
        state = parse_line(line, state, &mut table);
    }

    let (left, right) = parse_constraints(constraints_source);
    table.set_margins(left, right);

    log::debug!(
        "parsed {} patterns (longest {}), {} exceptions, margins {}/{}",
        table.pattern_count(),
        table.max_pattern_length(),
        table.exception_count(),
        left,
        right
    );
    table
}

/// Feed one line through the state machine.
pub fn parse_line(line: &str, state: ParserState, table: &mut PatternTable) -> ParserState {
    Tokens::new(line).fold(state, |state, token| state.advance(token, table))
}
