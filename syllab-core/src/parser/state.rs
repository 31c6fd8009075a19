//! Parser state machine
//!
//! The state is a plain value passed into and returned from every step, so
//! the active command and block nesting are never hidden in mutable fields.

use super::entry::{parse_exception, parse_pattern};
use super::token::Token;
use crate::table::PatternTable;

/// Command that gives meaning to the content of the following block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `\patterns`: Liang patterns with interleaved scores
    Patterns,
    /// `\hyphenation`: hyphen-marked exception words
    Hyphenation,
    /// Any other command; its block content is ignored
    Other,
}

impl Command {
    /// Classify a command name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "patterns" => Command::Patterns,
            "hyphenation" => Command::Hyphenation,
            _ => Command::Other,
        }
    }
}

/// Where the parser currently is in the command/brace grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParserState {
    /// Not inside any block and no pending command
    #[default]
    Outside,
    /// A command was read; its block has not opened yet
    InCommand(Command),
    /// Inside a block opened after `Command`
    InBlock(Command),
}

impl ParserState {
    /// Consume one token, recording any pattern or exception into `table`,
    /// and return the next state.
    pub fn advance(self, token: Token<'_>, table: &mut PatternTable) -> ParserState {
        match token {
            Token::Command(name) => {
                let command = Command::from_name(name);
                if command == Command::Other {
                    log::trace!("ignoring block content of \\{name}");
                }
                ParserState::InCommand(command)
            }
            Token::Open => match self {
                ParserState::Outside => ParserState::InBlock(Command::Other),
                ParserState::InCommand(command) | ParserState::InBlock(command) => {
                    ParserState::InBlock(command)
                }
            },
            Token::Close => ParserState::Outside,
            Token::Content(content) => {
                match self {
                    ParserState::InBlock(Command::Patterns) => match parse_pattern(content) {
                        Some((key, scores)) => table.insert_pattern(key, scores),
                        None => log::trace!("skipping malformed pattern {content:?}"),
                    },
                    ParserState::InBlock(Command::Hyphenation) => {
                        match parse_exception(content) {
                            Some((key, marked)) => table.insert_exception(key, marked),
                            None => log::trace!("skipping malformed exception {content:?}"),
                        }
                    }
                    _ => {}
                }
                self
            }
            Token::Skip(_) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(tokens: &[Token<'_>]) -> (ParserState, PatternTable) {
        let mut table = PatternTable::new();
        let state = tokens
            .iter()
            .fold(ParserState::Outside, |state, &token| {
                state.advance(token, &mut table)
            });
        (state, table)
    }

    #[test]
    fn test_transitions() {
        let mut table = PatternTable::new();
        let state = ParserState::Outside;
        let state = state.advance(Token::Command("patterns"), &mut table);
        assert_eq!(state, ParserState::InCommand(Command::Patterns));
        let state = state.advance(Token::Open, &mut table);
        assert_eq!(state, ParserState::InBlock(Command::Patterns));
        let state = state.advance(Token::Close, &mut table);
        assert_eq!(state, ParserState::Outside);
        let state = state.advance(Token::Open, &mut table);
        assert_eq!(state, ParserState::InBlock(Command::Other));
    }

    #[test]
    fn test_command_inside_block_switches_context() {
        let (state, table) = run(&[
            Token::Command("patterns"),
            Token::Open,
            Token::Command("relax"),
            Token::Content("a1b"),
        ]);
        assert_eq!(state, ParserState::InCommand(Command::Other));
        assert_eq!(table.pattern_count(), 0);
    }

    #[test]
    fn test_content_routed_by_active_command() {
        let (_, table) = run(&[
            Token::Command("patterns"),
            Token::Open,
            Token::Content("a1b"),
            Token::Close,
            Token::Command("hyphenation"),
            Token::Open,
            Token::Content("ta-ble"),
            Token::Close,
        ]);
        assert_eq!(table.scores("ab"), Some(&[0, 1, 0][..]));
        assert_eq!(table.exception("table"), Some("ta-ble"));
    }

    #[test]
    fn test_content_outside_blocks_is_ignored() {
        let (_, table) = run(&[
            Token::Content("a1b"),
            Token::Command("patterns"),
            Token::Content("c1d"),
            Token::Command("message"),
            Token::Open,
            Token::Content("e1f"),
            Token::Close,
        ]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_close_resets_active_command() {
        let (state, table) = run(&[
            Token::Command("patterns"),
            Token::Open,
            Token::Close,
            Token::Open,
            Token::Content("a1b"),
        ]);
        assert_eq!(state, ParserState::InBlock(Command::Other));
        assert!(table.is_empty());
    }
}
