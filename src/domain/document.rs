//! Documents flowing through the render pipeline

use std::path::{Path, PathBuf};

/// Raw Markdown text together with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownDocument {
    path: PathBuf,
    text: String,
}

impl MarkdownDocument {
    /// Creates a document from already loaded text
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Source path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Markdown source
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A complete, self-contained HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedHtml(String);

impl RenderedHtml {
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    /// The document markup
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the document, returning the markup
    pub fn into_string(self) -> String {
        self.0
    }
}
