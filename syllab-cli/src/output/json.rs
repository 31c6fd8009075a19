//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use syllab_api::{Output, WordSplit};

/// JSON formatter - outputs every word with its fragments as one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    words: Vec<WordSplit>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            words: Vec::new(),
            pretty,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, output: &Output) -> Result<()> {
        self.words.extend(output.words.iter().cloned());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
