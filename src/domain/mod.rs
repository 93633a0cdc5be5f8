//! Core domain models for mdview
//!
//! This module contains the value types shared by the bootstrapper and the
//! render pipeline:
//! - Runtime dependency declarations
//! - Bootstrap outcomes
//! - Markdown documents and rendered HTML
//! - Converter extras

mod bootstrap_result;
mod dependency;
mod document;
mod extra;

pub use bootstrap_result::{BootstrapResult, InstallFailure};
pub use dependency::{default_dependencies, parse_version_lenient, DependencySpec};
pub use document::{MarkdownDocument, RenderedHtml};
pub use extra::{supported_extras, Extra, ExtraSet, SUPPORTED_EXTRAS};
