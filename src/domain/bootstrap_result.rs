//! Outcome of a dependency check

use super::DependencySpec;
use std::fmt;

/// Result of checking (and possibly installing) runtime dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapResult {
    /// Every dependency is present
    AllSatisfied,
    /// These dependencies are missing, in declaration order
    MissingSet(Vec<DependencySpec>),
    /// An install was attempted and did not fix the problem
    InstallFailed(InstallFailure),
}

impl BootstrapResult {
    /// Returns true if rendering may proceed
    pub fn is_satisfied(&self) -> bool {
        matches!(self, BootstrapResult::AllSatisfied)
    }

    /// Returns the missing specs, if any
    pub fn missing(&self) -> &[DependencySpec] {
        match self {
            BootstrapResult::MissingSet(missing) => missing,
            BootstrapResult::InstallFailed(InstallFailure::StillMissing(missing)) => missing,
            _ => &[],
        }
    }
}

/// Why an install attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallFailure {
    /// The installer exited unsuccessfully
    ExitStatus {
        /// Exit code, `None` if the process was killed by a signal or never started
        code: Option<i32>,
        /// Captured standard output
        stdout: String,
        /// Captured standard error
        stderr: String,
    },
    /// The installer succeeded but the re-check still reports these as missing
    StillMissing(Vec<DependencySpec>),
}

impl fmt::Display for InstallFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallFailure::ExitStatus { code: Some(code), .. } => {
                write!(f, "installer exited with status {}", code)
            }
            InstallFailure::ExitStatus { code: None, .. } => {
                write!(f, "installer terminated without an exit status")
            }
            InstallFailure::StillMissing(missing) => {
                let names: Vec<String> = missing.iter().map(|d| d.to_string()).collect();
                write!(f, "still missing after install: {}", names.join(", "))
            }
        }
    }
}
