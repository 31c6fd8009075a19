//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use syllab_api::Output;

/// Plain text formatter - outputs the hyphenated text of every document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, output: &Output) -> Result<()> {
        self.writer.write_all(output.hyphenated.as_bytes())?;
        if !output.hyphenated.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syllab_api::Metadata;

    fn output(hyphenated: &str) -> Output {
        Output {
            hyphenated: hyphenated.to_string(),
            words: Vec::new(),
            metadata: Metadata {
                language: "xx".to_string(),
                threshold: "average".to_string(),
                word_count: 0,
                break_count: 0,
                processing_time_ms: 0,
            },
        }
    }

    #[test]
    fn test_documents_end_with_newline() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_document(&output("ta-ble")).unwrap();
        formatter.format_document(&output("as-so-ciate\n")).unwrap();
        formatter.finish().unwrap();
        assert_eq!(
            String::from_utf8(formatter.into_inner()).unwrap(),
            "ta-ble\nas-so-ciate\n"
        );
    }
}
