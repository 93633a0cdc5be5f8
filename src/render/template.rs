//! Fixed HTML document shell
//!
//! The shell is one template with a single insertion point for the body.
//! It is stored as the two halves around that point so the head, including
//! the whole stylesheet, is always written before any fragment markup.
//! Nothing in the template refers to an external resource.

use crate::domain::RenderedHtml;

/// Everything before the fragment
pub const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Markdown Viewer</title>
<style>
body {
    font-family: 'Helvetica', 'Arial', sans-serif;
    font-size: 16px;
    line-height: 1.6;
    background-color: #ffffff;
    color: #000000;
    margin: 20px auto;
    max-width: 60em;
    padding: 0 20px;
}
h1 {
    font-size: 2em;
    border-bottom: 1px solid #000000;
    padding-bottom: 0.3em;
}
h2 {
    font-size: 1.5em;
    border-bottom: 1px solid #d0d7de;
    padding-bottom: 0.3em;
}
a {
    color: #0969da;
}
code {
    font-family: 'Consolas', 'Courier New', monospace;
    background-color: #f0f0f0;
    padding: 2px 4px;
    border-radius: 3px;
}
pre {
    font-family: 'Consolas', 'Courier New', monospace;
    background-color: #f0f0f0;
    padding: 16px;
    overflow-x: auto;
    border-radius: 6px;
}
pre code {
    padding: 0;
    background-color: transparent;
}
table {
    border-collapse: collapse;
    margin: 1em 0;
}
th, td {
    border: 1px solid #d0d7de;
    padding: 6px 13px;
}
th {
    background-color: #f6f8fa;
}
blockquote {
    margin: 1em 0;
    padding: 0 1em;
    color: #57606a;
    border-left: 4px solid #d0d7de;
}
img {
    max-width: 100%;
}
.hl-comment { color: #6a737d; font-style: italic; }
.hl-string { color: #032f62; }
.hl-constant.hl-numeric, .hl-constant.hl-language { color: #005cc5; }
.hl-keyword, .hl-storage { color: #d73a49; }
.hl-entity.hl-name.hl-function { color: #6f42c1; }
.hl-entity.hl-name.hl-type, .hl-support.hl-type { color: #22863a; }
.hl-variable.hl-parameter { color: #e36209; }
.hl-punctuation.hl-definition.hl-comment { color: #6a737d; }
</style>
</head>
<body>
"#;

/// Everything after the fragment
pub const DOCUMENT_TAIL: &str = "</body>\n</html>\n";

/// Embed `fragment` into the document shell
///
/// The fragment is trusted converter output and is inserted verbatim.
pub fn wrap(fragment: &str) -> RenderedHtml {
    let mut html =
        String::with_capacity(DOCUMENT_HEAD.len() + fragment.len() + DOCUMENT_TAIL.len());
    html.push_str(DOCUMENT_HEAD);
    html.push_str(fragment);
    html.push_str(DOCUMENT_TAIL);
    RenderedHtml::new(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty_fragment() {
        let html = wrap("");
        let html = html.as_str();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.ends_with("</body>\n</html>\n"));
        assert_eq!(html.matches("<head>").count(), 1);
        assert_eq!(html.matches("</head>").count(), 1);
        assert_eq!(html.matches("<body>").count(), 1);
    }

    #[test]
    fn test_wrap_exact_output() {
        let html = wrap("<p>hi</p>\n");
        assert_eq!(
            html.as_str(),
            format!("{}<p>hi</p>\n{}", DOCUMENT_HEAD, DOCUMENT_TAIL)
        );
    }

    #[test]
    fn test_head_precedes_fragment() {
        let fragment = "<style>body { color: red; }</style><p>x</p>";
        let html = wrap(fragment);
        let html = html.as_str();
        let head_end = html.find("</head>").unwrap();
        let fragment_at = html.find(fragment).unwrap();
        assert!(head_end < fragment_at);
        assert!(html.find("<body>").unwrap() < fragment_at);
    }

    #[test]
    fn test_large_fragment() {
        let fragment = "<p>line</p>\n".repeat(50_000);
        let html = wrap(&fragment);
        assert_eq!(html.as_str().matches("</head>").count(), 1);
        assert!(html.as_str().ends_with(DOCUMENT_TAIL));
    }

    #[test]
    fn test_no_external_resources() {
        let html = wrap("");
        let html = html.as_str();
        assert!(!html.contains("http://"));
        assert!(!html.contains("https://"));
        assert!(!html.contains("<link"));
        assert!(!html.contains("<script"));
        assert!(!html.contains("@import"));
    }

    #[test]
    fn test_stylesheet_rules_present() {
        for selector in ["body {", "code {", "pre {", "th, td {", "blockquote {", ".hl-comment"] {
            assert!(DOCUMENT_HEAD.contains(selector), "missing {}", selector);
        }
        assert!(DOCUMENT_HEAD.contains("border-left"));
        assert!(DOCUMENT_HEAD.contains("background-color: #ffffff"));
    }
}
