//! Splitting running text into fragments
//!
//! Words are found with a regular expression; everything between words
//! (spaces, punctuation, digits) is glued onto the neighbouring fragments.
//! Concatenating the returned parts always reproduces the input, and the
//! only places where parts meet are syllable breaks inside words.

use crate::error::Result;
use regex::Regex;

/// Default word pattern: a letter followed by letters and combining marks.
pub const DEFAULT_WORD_PATTERN: &str = r"\p{L}[\p{L}\p{M}]*";

/// Finds words in text and reassembles segmented words with their context.
#[derive(Debug, Clone)]
pub struct TextSplitter {
    word: Regex,
}

impl TextSplitter {
    /// Splitter using [`DEFAULT_WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_WORD_PATTERN)
    }

    /// Splitter using a custom word pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            word: Regex::new(pattern)?,
        })
    }

    /// The word pattern in use.
    pub fn pattern(&self) -> &str {
        self.word.as_str()
    }

    /// Words of `text`, in order.
    pub fn words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.word.find_iter(text).map(|found| found.as_str())
    }

    /// Split `text`, segmenting every word with `segment`.
    ///
    /// Text before a word is prepended to its first fragment, text after the
    /// last word is appended to the last fragment, and text between two
    /// words joins the last fragment of one with the first of the next.
    pub fn split<F>(&self, text: &str, mut segment: F) -> Vec<String>
    where
        F: FnMut(&str) -> Vec<String>,
    {
        let mut parts = Vec::new();
        let mut pending = String::new();
        let mut cursor = 0;

        for found in self.word.find_iter(text) {
            pending.push_str(&text[cursor..found.start()]);
            cursor = found.end();

            let mut fragments = segment(found.as_str()).into_iter();
            if let Some(first) = fragments.next() {
                pending.push_str(&first);
            }
            for fragment in fragments {
                parts.push(std::mem::replace(&mut pending, fragment));
            }
        }

        pending.push_str(&text[cursor..]);
        parts.push(pending);
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Breaks after every second character of words longer than three.
    fn pairs(word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= 3 {
            return vec![word.to_string()];
        }
        chars.chunks(2).map(|chunk| chunk.iter().collect()).collect()
    }

    #[test]
    fn test_context_attaches_to_fragments() {
        let splitter = TextSplitter::new().unwrap();
        assert_eq!(
            splitter.split("(abcd, efgh!)", pairs),
            vec!["(ab", "cd, ef", "gh!)"]
        );
    }

    #[test]
    fn test_parts_concatenate_to_input() {
        let splitter = TextSplitter::new().unwrap();
        let text = "  Zwölf Boxkämpfer jagen 42 Viktor quer über den Sylter Deich. ";
        assert_eq!(splitter.split(text, pairs).concat(), text);
    }

    #[test]
    fn test_text_without_words() {
        let splitter = TextSplitter::new().unwrap();
        assert_eq!(splitter.split("12 -- 34", pairs), vec!["12 -- 34"]);
        assert_eq!(splitter.split("", pairs), vec![""]);
    }

    #[test]
    fn test_combining_marks_belong_to_words() {
        let splitter = TextSplitter::new().unwrap();
        let words: Vec<&str> = splitter.words("cafe\u{301} noir").collect();
        assert_eq!(words, vec!["cafe\u{301}", "noir"]);
    }

    #[test]
    fn test_custom_pattern() {
        let splitter = TextSplitter::with_pattern(r"[a-z]+").unwrap();
        assert_eq!(splitter.pattern(), "[a-z]+");
        let words: Vec<&str> = splitter.words("abc DEF ghi").collect();
        assert_eq!(words, vec!["abc", "ghi"]);
        assert!(TextSplitter::with_pattern("[").is_err());
    }
}
