//! Viewer shell: picks files, renders them, shows the result
//!
//! The shell is deliberately thin. The file dialog and the display are
//! external programs reached through the `FilePicker` and `RenderSurface`
//! traits; everything with decision logic lives in `render`.

mod picker;
mod surface;

pub use picker::{file_filter, FilePicker, ZenityPicker, MARKDOWN_EXTENSIONS};
pub use surface::{BrowserSurface, RenderSurface};

use crate::console::Console;
use crate::domain::RenderedHtml;
use crate::error::{AppError, RenderError, ShellError};
use crate::render::{escape_html, render, wrap};
use std::path::Path;

/// Runs open actions one after another until the user cancels
pub struct Viewer<P, S> {
    picker: P,
    surface: S,
    console: Console,
}

impl<P: FilePicker, S: RenderSurface> Viewer<P, S> {
    /// Create a viewer from its collaborators
    pub fn new(picker: P, surface: S, console: Console) -> Self {
        Self {
            picker,
            surface,
            console,
        }
    }

    /// Loop until the picker is cancelled; returns how many documents were shown
    ///
    /// A file that cannot be loaded or converted is reported on stderr and
    /// on the surface as an error page; a display failure is reported on
    /// stderr. Either way the loop continues. Only a broken picker ends the
    /// loop with an error.
    pub fn run(&mut self) -> Result<usize, ShellError> {
        let mut shown = 0;
        while let Some(path) = self.picker.pick()? {
            match self.open(&path) {
                Ok(()) => {
                    shown += 1;
                    self.console
                        .success(&format!("Loaded Markdown file: {}", path.display()));
                }
                Err(AppError::Render(e)) => {
                    self.console
                        .error(&format!("could not load {}: {}", path.display(), e));
                    if let Err(e) = self.surface.show(&error_page(&e)) {
                        self.console.error(&e.to_string());
                    }
                }
                Err(e) => self.console.error(&e.to_string()),
            }
        }
        self.console.detail("No file selected, shutting down");
        Ok(shown)
    }

    /// Render `path` and hand the document to the surface
    pub fn open(&mut self, path: &Path) -> Result<(), AppError> {
        let html = render(path)?;
        self.surface.show(&html)?;
        Ok(())
    }

    /// Consumes the viewer, returning its surface
    pub fn into_surface(self) -> S {
        self.surface
    }
}

/// Styled page telling the user why a file could not be shown
fn error_page(error: &RenderError) -> RenderedHtml {
    wrap(&format!(
        "<h3>Error</h3>\n<p>Could not load file: {}</p>\n",
        escape_html(&error.to_string())
    ))
}
