//! Optional converter behaviours

use std::collections::BTreeSet;
use std::fmt;

/// A named optional behaviour of the Markdown converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Extra {
    /// Honour the language tag on fenced code blocks
    FencedCodeBlocks,
    /// Syntax highlighting for language-tagged code blocks
    Highlight,
    /// GFM pipe tables
    Tables,
    /// Generate `id` attributes for headings
    HeaderIds,
    /// `~~struck~~` text
    Strikethrough,
    /// `- [x]` task list items
    TaskLists,
    /// `[^1]` footnotes
    Footnotes,
}

impl Extra {
    /// Returns the extra's canonical name
    pub fn name(&self) -> &'static str {
        match self {
            Extra::FencedCodeBlocks => "fenced-code-blocks",
            Extra::Highlight => "highlight",
            Extra::Tables => "tables",
            Extra::HeaderIds => "header-ids",
            Extra::Strikethrough => "strikethrough",
            Extra::TaskLists => "task-lists",
            Extra::Footnotes => "footnotes",
        }
    }

    /// Returns all known extras
    pub fn all() -> &'static [Extra] {
        &[
            Extra::FencedCodeBlocks,
            Extra::Highlight,
            Extra::Tables,
            Extra::HeaderIds,
            Extra::Strikethrough,
            Extra::TaskLists,
            Extra::Footnotes,
        ]
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An ordered set of extras
pub type ExtraSet = BTreeSet<Extra>;

/// The extras the viewer always requests
pub const SUPPORTED_EXTRAS: &[Extra] = &[
    Extra::FencedCodeBlocks,
    Extra::Highlight,
    Extra::Tables,
    Extra::HeaderIds,
    Extra::Strikethrough,
    Extra::TaskLists,
];

/// Builds the set of extras the viewer always requests
pub fn supported_extras() -> ExtraSet {
    SUPPORTED_EXTRAS.iter().copied().collect()
}
