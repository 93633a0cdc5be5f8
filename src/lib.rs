//! mdview - offline Markdown viewer library
//!
//! This library provides the two pieces with real decision logic:
//! - The dependency bootstrapper that gates startup
//! - The render pipeline: Markdown file → self-contained HTML document
//!
//! plus the thin shell wiring them to a file dialog and a display.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod progress;
pub mod render;
pub mod shell;
