//! User-facing status messages
//!
//! All messages go to stderr, colored when the terminal supports it.
//! Errors are always printed; everything else honours the verbosity level.

use colored::Colorize;

/// Output verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only
    Quiet,
    /// Normal output
    #[default]
    Normal,
    /// Detailed output with additional information
    Verbose,
}

impl Verbosity {
    /// Determine verbosity from CLI flags; quiet wins over verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

/// Prints status lines according to a verbosity level
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    verbosity: Verbosity,
}

impl Console {
    /// Create a console with the given verbosity
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Whether interactive decorations such as spinners should be shown
    pub fn decorations_enabled(&self) -> bool {
        self.verbosity >= Verbosity::Normal
    }

    /// Plain informational line
    pub fn info(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{}", message);
        }
    }

    /// Successful completion
    pub fn success(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "✓".green().bold(), message.green());
        }
    }

    /// Something the user should notice but that does not stop the program
    pub fn warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!("{} {}", "warning:".yellow().bold(), message);
        }
    }

    /// An error; always printed
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "error:".red().bold(), message);
    }

    /// Highlight a command the user may want to copy
    pub fn command(&self, command: &str) {
        if self.verbosity >= Verbosity::Normal {
            eprintln!();
            eprintln!("    {}", command.cyan());
            eprintln!();
        }
    }

    /// Extra detail shown in verbose mode
    pub fn detail(&self, message: &str) {
        if self.verbosity >= Verbosity::Verbose {
            eprintln!("{}", message.dimmed());
        }
    }
}
