//! Spinner shown while the package manager runs
//!
//! The install is a blocking wait with no output until it finishes, so the
//! only feedback is an indeterminate indicatif spinner.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner for one blocking external command
pub struct Spinner {
    /// `None` when decorations are disabled (quiet mode, no terminal)
    bar: Option<ProgressBar>,
}

impl Spinner {
    /// Start spinning with `message`, or do nothing when `enabled` is false
    pub fn start(enabled: bool, message: &str) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Remove the spinner from the terminal
    pub fn stop(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
