//! Markdown to HTML fragment conversion
//!
//! pulldown-cmark does the parsing. The event stream is post-processed for
//! the extras pulldown-cmark does not cover by itself: heading ids and
//! highlighted code blocks.

use super::highlight::highlight_code;
use crate::domain::{Extra, ExtraSet, MarkdownDocument};
use crate::error::ConversionError;
use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use std::any::Any;
use std::collections::HashMap;
use std::fmt::Write;
use std::panic::{self, AssertUnwindSafe};

/// Translate extras into pulldown-cmark parser options
pub fn markdown_options(extras: &ExtraSet) -> Options {
    let mut options = Options::empty();
    if extras.contains(&Extra::Tables) {
        options.insert(Options::ENABLE_TABLES);
    }
    if extras.contains(&Extra::Strikethrough) {
        options.insert(Options::ENABLE_STRIKETHROUGH);
    }
    if extras.contains(&Extra::TaskLists) {
        options.insert(Options::ENABLE_TASKLISTS);
    }
    if extras.contains(&Extra::Footnotes) {
        options.insert(Options::ENABLE_FOOTNOTES);
    }
    if extras.contains(&Extra::HeaderIds) {
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);
    }
    options
}

/// Convert a document to an HTML fragment
///
/// Output depends only on the text and `extras`. Malformed Markdown is
/// rendered literally; a panic inside the converter is reported as
/// `ConversionError::Panicked` instead of unwinding into the caller. The
/// process panic hook still runs first, so its message reaches stderr.
pub fn convert(doc: &MarkdownDocument, extras: &ExtraSet) -> Result<String, ConversionError> {
    catch_panics(|| convert_text(doc.text(), extras))
}

/// Run `convert`, turning a panic into `ConversionError::Panicked`
fn catch_panics<F>(convert: F) -> Result<String, ConversionError>
where
    F: FnOnce() -> Result<String, ConversionError>,
{
    panic::catch_unwind(AssertUnwindSafe(convert)).unwrap_or_else(|payload| {
        Err(ConversionError::Panicked {
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

struct PendingCode {
    language: Option<String>,
    source: String,
}

struct PendingHeading {
    index: usize,
    text: String,
}

fn convert_text(text: &str, extras: &ExtraSet) -> Result<String, ConversionError> {
    let header_ids = extras.contains(&Extra::HeaderIds);
    let mut slugs = SlugRegistry::default();
    let mut events: Vec<Event<'_>> = Vec::new();
    let mut code: Option<PendingCode> = None;
    let mut heading: Option<PendingHeading> = None;

    let parsed: Vec<Event<'_>> = Parser::new_ext(text, markdown_options(extras)).collect();
    if header_ids {
        // Explicit ids win over generated ones anywhere in the document
        for event in &parsed {
            if let Event::Start(Tag::Heading { id: Some(id), .. }) = event {
                slugs.reserve(id);
            }
        }
    }

    for event in parsed {
        if let Some(pending) = code.as_mut() {
            match event {
                Event::Text(t) => pending.source.push_str(&t),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code.take() {
                        let html = render_code_block(&block, extras)?;
                        events.push(Event::Html(CowStr::from(html)));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code = Some(PendingCode {
                    language: code_language(&kind, extras),
                    source: String::new(),
                });
            }
            Event::Start(Tag::Heading { .. }) if header_ids => {
                heading = Some(PendingHeading {
                    index: events.len(),
                    text: String::new(),
                });
                events.push(event);
            }
            Event::End(TagEnd::Heading(_)) if header_ids => {
                if let Some(pending) = heading.take() {
                    let start = events.get_mut(pending.index);
                    if let Some(Event::Start(Tag::Heading { id: id @ None, .. })) = start {
                        *id = Some(CowStr::from(slugs.claim(&pending.text)));
                    }
                }
                events.push(event);
            }
            Event::Text(ref t) | Event::Code(ref t) => {
                if let Some(pending) = heading.as_mut() {
                    pending.text.push_str(t);
                }
                events.push(event);
            }
            other => events.push(other),
        }
    }

    let mut fragment = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut fragment, events.into_iter());
    Ok(fragment)
}

/// Language tag of a fenced block, when the fenced-code extra honours it
fn code_language(kind: &CodeBlockKind<'_>, extras: &ExtraSet) -> Option<String> {
    if !extras.contains(&Extra::FencedCodeBlocks) {
        return None;
    }
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
            .next()
            .filter(|lang| !lang.is_empty())
            .map(str::to_string),
        CodeBlockKind::Indented => None,
    }
}

fn render_code_block(block: &PendingCode, extras: &ExtraSet) -> Result<String, ConversionError> {
    let mut out = String::with_capacity(block.source.len() + 64);
    let Some(language) = block.language.as_deref() else {
        let _ = writeln!(out, "<pre><code>{}</code></pre>", escape_html(&block.source));
        return Ok(out);
    };

    let highlighted = if extras.contains(&Extra::Highlight) {
        highlight_code(language, &block.source)?
    } else {
        None
    };

    let (pre_class, body) = match highlighted {
        Some(html) => (r#" class="highlight""#, html),
        None => ("", escape_html(&block.source)),
    };
    let _ = writeln!(
        out,
        r#"<pre{}><code class="language-{}">{}</code></pre>"#,
        pre_class,
        escape_html(language),
        body
    );
    Ok(out)
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Turn heading text into an id: lowercase words joined by `-`
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        slug.push_str("section");
    }
    slug
}

/// Hands out unique heading ids within one document
#[derive(Default)]
struct SlugRegistry {
    used: HashMap<String, usize>,
}

impl SlugRegistry {
    fn claim(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        while let Some(count) = self.used.get_mut(&base) {
            *count += 1;
            candidate = format!("{}-{}", base, count);
            if !self.used.contains_key(&candidate) {
                break;
            }
        }
        self.used.entry(candidate.clone()).or_insert(0);
        candidate
    }

    fn reserve(&mut self, id: &str) {
        self.used.entry(id.to_string()).or_insert(0);
    }
}
