//! File selection through an external dialog

use crate::error::ShellError;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Extensions offered by the open dialog
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown"];

/// Chooses the next file to open
pub trait FilePicker {
    /// Returns `Ok(None)` when the user cancels
    fn pick(&mut self) -> Result<Option<PathBuf>, ShellError>;
}

/// Dialog filter in zenity's `Name | pattern pattern` syntax
pub fn file_filter() -> String {
    let patterns: Vec<String> = MARKDOWN_EXTENSIONS
        .iter()
        .map(|ext| format!("*.{}", ext))
        .collect();
    format!("Markdown files | {}", patterns.join(" "))
}

/// Native file dialog provided by `zenity`
#[derive(Debug, Clone)]
pub struct ZenityPicker {
    program: String,
}

impl ZenityPicker {
    /// Create a picker running `zenity` from `PATH`
    pub fn new() -> Self {
        Self::with_program("zenity")
    }

    /// Create a picker running a specific executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for ZenityPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FilePicker for ZenityPicker {
    fn pick(&mut self) -> Result<Option<PathBuf>, ShellError> {
        let output = Command::new(&self.program)
            .args(["--file-selection", "--title=Open Markdown file"])
            .arg(format!("--file-filter={}", file_filter()))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ShellError::picker(format!("failed to run {}: {}", self.program, e)))?;

        match output.status.code() {
            Some(0) => {
                let selected = String::from_utf8_lossy(&output.stdout);
                let selected = selected.trim_end_matches(['\r', '\n']);
                if selected.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(PathBuf::from(selected)))
                }
            }
            // zenity exits with 1 when the dialog is cancelled or closed
            Some(1) => Ok(None),
            code => Err(ShellError::picker(format!(
                "{} exited with {}: {}",
                self.program,
                code.map_or_else(|| "signal".to_string(), |c| c.to_string()),
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }
}
