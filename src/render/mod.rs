//! Markdown file → styled HTML document
//!
//! This module provides:
//! - Loading a file as UTF-8 text
//! - Conversion to an HTML fragment with the supported extras
//! - Wrapping the fragment in the fixed document template
//!
//! Nothing here keeps state between calls; every render owns its buffers.

mod convert;
mod highlight;
mod loader;
mod template;

pub use convert::{convert, escape_html, markdown_options, slugify};
pub use highlight::{highlight_code, CLASS_PREFIX};
pub use loader::load_document;
pub use template::{wrap, DOCUMENT_HEAD, DOCUMENT_TAIL};

use crate::domain::{supported_extras, RenderedHtml};
use crate::error::RenderError;
use std::path::Path;

/// Load, convert and wrap the Markdown file at `path`
pub fn render(path: &Path) -> Result<RenderedHtml, RenderError> {
    let doc = load_document(path)?;
    let fragment = convert(&doc, &supported_extras())?;
    Ok(wrap(&fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocumentError;
    use std::fs;

    #[test]
    fn test_render_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("title.md");
        fs::write(&path, "# Title").unwrap();

        let html = render(&path).unwrap();
        let body = html
            .as_str()
            .strip_prefix(DOCUMENT_HEAD)
            .and_then(|rest| rest.strip_suffix(DOCUMENT_TAIL))
            .unwrap();
        assert_eq!(body, "<h1 id=\"title\">Title</h1>\n");
    }

    #[test]
    fn test_render_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        let html = render(&path).unwrap();
        assert_eq!(html.as_str(), format!("{}{}", DOCUMENT_HEAD, DOCUMENT_TAIL));
    }

    #[test]
    fn test_render_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&dir.path().join("nope.md")).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Document(DocumentError::NotFound { .. })
        ));
    }
}
