//! Application error types using thiserror
//!
//! Error hierarchy:
//! - BootstrapError: missing runtime dependencies (always fatal)
//! - DocumentError: loading a Markdown file
//! - ConversionError: turning Markdown into HTML
//! - RenderError: either of the two above, per open action
//! - ConfigError: reading the optional config file
//! - ShellError: the file picker and rendering surface

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{DependencySpec, InstallFailure};

/// Failure of a single open action in the viewer
///
/// Startup failures (`BootstrapError`, `ConfigError`) never reach this type;
/// `main` reports them directly and exits.
#[derive(Error, Debug)]
pub enum AppError {
    /// Render pipeline errors
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Viewer shell errors
    #[error(transparent)]
    Shell(#[from] ShellError),
}

/// Errors that stop the process before any rendering happens
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Dependencies are missing and installation was disabled
    #[error("missing dependencies: {}; install them with `{command}`", names(.missing))]
    DependencyMissing {
        missing: Vec<DependencySpec>,
        command: String,
    },

    /// The user did not approve the install command
    #[error("installation declined; install dependencies manually with `{command}`")]
    InstallDeclined { command: String },

    /// The install command ran but dependencies are still unavailable
    #[error("dependency installation failed ({failure}); run `{command}` manually")]
    InstallFailed {
        command: String,
        failure: InstallFailure,
    },
}

fn names(missing: &[DependencySpec]) -> String {
    missing
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors related to loading a Markdown document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// File does not exist
    #[error("file not found: {path}")]
    NotFound { path: PathBuf },

    /// File exists but cannot be opened
    #[error("permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// File is not valid UTF-8
    #[error("{path} is not valid UTF-8 (invalid byte at offset {valid_up_to})")]
    Decode { path: PathBuf, valid_up_to: usize },

    /// Any other read failure
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while converting Markdown to HTML
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Syntax highlighting failed for a code block
    #[error("failed to highlight `{language}` code block: {message}")]
    Highlight { language: String, message: String },

    /// The converter panicked on pathological input
    #[error("markdown conversion aborted: {message}")]
    Panicked { message: String },
}

/// Errors scoped to a single open-file action
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A dependency declares an unparseable minimum version
    #[error("invalid minimum version '{value}' for dependency '{module}': {message}")]
    InvalidVersion {
        module: String,
        value: String,
        message: String,
    },

    /// A dependency list was given but is empty
    #[error("config file {path} declares an empty dependency list")]
    EmptyDependencies { path: PathBuf },

    /// Installer constraint template lacks the package placeholder
    #[error("installer constraint '{template}' must contain {{package}}")]
    InvalidConstraint { template: String },
}

/// Errors raised by the external collaborators of the viewer shell
#[derive(Error, Debug)]
pub enum ShellError {
    /// The file picker failed (not merely cancelled)
    #[error("file picker failed: {message}")]
    Picker { message: String },

    /// The rendering surface could not display the document
    #[error("rendering surface failed: {message}")]
    Surface { message: String },
}

impl DocumentError {
    /// Classifies an IO error raised while reading `path`
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => DocumentError::NotFound { path },
            io::ErrorKind::PermissionDenied => DocumentError::PermissionDenied { path },
            io::ErrorKind::InvalidData => DocumentError::Decode {
                path,
                valid_up_to: 0,
            },
            _ => DocumentError::Unreadable { path, source },
        }
    }

    /// Creates a new Decode error
    pub fn decode(path: impl Into<PathBuf>, valid_up_to: usize) -> Self {
        DocumentError::Decode {
            path: path.into(),
            valid_up_to,
        }
    }
}

impl ConversionError {
    /// Creates a new Highlight error
    pub fn highlight(language: impl Into<String>, message: impl Into<String>) -> Self {
        ConversionError::Highlight {
            language: language.into(),
            message: message.into(),
        }
    }
}

impl ConfigError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ShellError {
    /// Creates a new Picker error
    pub fn picker(message: impl Into<String>) -> Self {
        ShellError::Picker {
            message: message.into(),
        }
    }

    /// Creates a new Surface error
    pub fn surface(message: impl Into<String>) -> Self {
        ShellError::Surface {
            message: message.into(),
        }
    }
}
