//! Handing rendered documents to something that can display them

use crate::domain::RenderedHtml;
use crate::error::ShellError;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Displays a rendered document
pub trait RenderSurface {
    /// Show `html`; the surface must not depend on `html` after returning
    fn show(&mut self, html: &RenderedHtml) -> Result<(), ShellError>;
}

/// Writes each document to its own file and opens it with an external program
///
/// Files live in a private temporary directory that is removed when the
/// surface is dropped.
pub struct BrowserSurface {
    opener: String,
    dir: TempDir,
    shown: Vec<PathBuf>,
}

impl BrowserSurface {
    /// Create a surface launching `opener <file>`
    pub fn new(opener: impl Into<String>) -> Result<Self, ShellError> {
        let dir = tempfile::Builder::new()
            .prefix("mdview-")
            .tempdir()
            .map_err(|e| ShellError::surface(format!("cannot create temp dir: {}", e)))?;
        Ok(Self {
            opener: opener.into(),
            dir,
            shown: Vec::new(),
        })
    }

    /// Files written so far, oldest first
    pub fn shown(&self) -> &[PathBuf] {
        &self.shown
    }

    fn write_document(&self, html: &RenderedHtml) -> Result<PathBuf, ShellError> {
        let mut file = tempfile::Builder::new()
            .prefix("mdview-")
            .suffix(".html")
            .tempfile_in(self.dir.path())
            .map_err(|e| ShellError::surface(format!("cannot create document file: {}", e)))?;
        file.write_all(html.as_str().as_bytes())
            .map_err(|e| ShellError::surface(format!("cannot write document file: {}", e)))?;
        let (_, path) = file
            .keep()
            .map_err(|e| ShellError::surface(format!("cannot keep document file: {}", e)))?;
        Ok(path)
    }
}

impl RenderSurface for BrowserSurface {
    fn show(&mut self, html: &RenderedHtml) -> Result<(), ShellError> {
        let path = self.write_document(html)?;
        let status = Command::new(&self.opener)
            .arg(&path)
            .stdin(Stdio::null())
            .status()
            .map_err(|e| ShellError::surface(format!("failed to run {}: {}", self.opener, e)))?;
        self.shown.push(path);

        if status.success() {
            Ok(())
        } else {
            Err(ShellError::surface(format!(
                "{} exited with {}",
                self.opener, status
            )))
        }
    }
}
