//! Tokenizer for the TeX pattern-file grammar
//!
//! The grammar is line oriented. `%` starts a comment running to the end of
//! the line, `\name` is a command, `{` and `}` delimit blocks, and anything
//! else is either block content or skipped one character at a time.

/// One lexical token from a pattern-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `\name`, carrying the name without the backslash
    Command(&'a str),
    /// `{`
    Open,
    /// `}`
    Close,
    /// Run of letters, combining marks, digits, `-` and `.`
    Content(&'a str),
    /// Anything else: whitespace, stray punctuation, a lone backslash
    Skip(&'a str),
}

/// Strip a `%` comment from a line.
pub fn strip_comment(line: &str) -> &str {
    match line.find('%') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn is_content_char(ch: char) -> bool {
    ch.is_alphabetic() || ch.is_numeric() || ch == '-' || ch == '.' || is_mark(ch)
}

fn is_mark(ch: char) -> bool {
    unicode_normalization::char::is_combining_mark(ch)
}

/// Split the next token off the front of `input`.
///
/// Returns `None` once `input` is exhausted.
pub fn next_token(input: &str) -> Option<(Token<'_>, &str)> {
    let first = input.chars().next()?;
    match first {
        '{' => Some((Token::Open, &input[1..])),
        '}' => Some((Token::Close, &input[1..])),
        '\\' => {
            let name_len: usize = input[1..]
                .chars()
                .take_while(|ch| ch.is_alphabetic())
                .map(char::len_utf8)
                .sum();
            if name_len == 0 {
                Some((Token::Skip(&input[..1]), &input[1..]))
            } else {
                let end = 1 + name_len;
                Some((Token::Command(&input[1..end]), &input[end..]))
            }
        }
        ch if is_content_char(ch) => {
            let end = input
                .char_indices()
                .find(|&(_, ch)| !is_content_char(ch))
                .map_or(input.len(), |(pos, _)| pos);
            Some((Token::Content(&input[..end]), &input[end..]))
        }
        ch => {
            let end = ch.len_utf8();
            Some((Token::Skip(&input[..end]), &input[end..]))
        }
    }
}

/// Iterator over the tokens of one (comment-stripped) line.
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Tokenize `line`, dropping any `%` comment first.
    pub fn new(line: &'a str) -> Self {
        Self {
            rest: strip_comment(line),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, rest) = next_token(self.rest)?;
        self.rest = rest;
        Some(token)
    }
}
