//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use std::path::PathBuf;

/// One unit of input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// A file on disk
    File(PathBuf),
    /// Text given on the command line
    Inline(String),
    /// Standard input
    Stdin,
}

impl Document {
    /// Short name for progress and log messages
    pub fn name(&self) -> String {
        match self {
            Document::File(path) => path.display().to_string(),
            Document::Inline(_) => "<arguments>".to_string(),
            Document::Stdin => "<stdin>".to_string(),
        }
    }
}

/// Decide what to read: files matching `patterns`, else the inline `text`
/// words joined by spaces, else standard input.
pub fn collect_documents(patterns: &[String], text: &[String]) -> anyhow::Result<Vec<Document>> {
    if !patterns.is_empty() {
        let files = resolve_patterns(patterns)?;
        return Ok(files.into_iter().map(Document::File).collect());
    }
    if !text.is_empty() {
        return Ok(vec![Document::Inline(text.join(" "))]);
    }
    Ok(vec![Document::Stdin])
}
