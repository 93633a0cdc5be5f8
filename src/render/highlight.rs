//! Syntax highlighting for fenced code blocks
//!
//! Highlighting emits `<span>` elements carrying scope classes (prefixed with
//! [`CLASS_PREFIX`]) instead of inline colors, so the fixed stylesheet in
//! the document template decides how they look.

use crate::error::ConversionError;
use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Prefix applied to every highlight class
pub const CLASS_PREFIX: &str = "hl-";

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Highlight `code` as `language`
///
/// Returns `Ok(None)` when the language is unknown; the caller then emits
/// the code escaped but otherwise plain.
pub fn highlight_code(language: &str, code: &str) -> Result<Option<String>, ConversionError> {
    let syntaxes: &SyntaxSet = &SYNTAXES;
    let Some(syntax) = syntaxes.find_syntax_by_token(language) else {
        return Ok(None);
    };

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        syntax,
        syntaxes,
        ClassStyle::SpacedPrefixed {
            prefix: CLASS_PREFIX,
        },
    );
    for line in LinesWithEndings::from(code) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|e| ConversionError::highlight(language, e.to_string()))?;
    }
    Ok(Some(generator.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_lookup_by_name_or_extension() {
        assert!(highlight_code("rust", "x\n").unwrap().is_some());
        assert!(highlight_code("rs", "x\n").unwrap().is_some());
        assert!(highlight_code("python", "x\n").unwrap().is_some());
    }

    #[test]
    fn test_highlight_rust_emits_prefixed_classes() {
        let html = highlight_code("rust", "fn main() {}\n").unwrap().unwrap();
        assert!(html.contains(r#"class="hl-"#));
        assert!(html.contains("hl-rust"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_highlight_escapes_markup() {
        let html = highlight_code("rust", "let s = \"<b>\";\n").unwrap().unwrap();
        assert!(html.contains("&lt;b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_highlight_unknown_language() {
        assert_eq!(highlight_code("no-such-language", "x\n").unwrap(), None);
    }

    #[test]
    fn test_highlight_is_deterministic() {
        let code = "def f(x):\n    return x * 2\n";
        let first = highlight_code("python", code).unwrap();
        let second = highlight_code("python", code).unwrap();
        assert_eq!(first, second);
    }
}
