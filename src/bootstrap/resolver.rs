//! Dependency availability probes
//!
//! This module provides:
//! - The `ModuleResolver` seam used by `Bootstrapper::check`
//! - `PathResolver`, which looks commands up on `PATH` and, when asked to,
//!   probes `--version`
//! - `MapResolver`, a fixed name → present table

use crate::domain::{parse_version_lenient, DependencySpec};
use regex::Regex;
use semver::Version;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::LazyLock;

// First dotted version number in `--version` output: 3.44, 1.1.3, 4.0.1-rc1
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?(?:-[0-9A-Za-z.]+)?)").unwrap());

/// Answers whether a dependency is currently usable
pub trait ModuleResolver {
    /// Returns true if `spec` is present and new enough
    fn is_available(&self, spec: &DependencySpec) -> bool;
}

/// Resolves dependencies as executables on `PATH`
///
/// Lookup alone never runs anything. With version probing enabled each
/// found executable is run once with `--version`.
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    /// Overrides the process `PATH` when set
    search_path: Option<OsString>,
    /// Run `--version` and compare against `min_version`
    probe_versions: bool,
}

impl PathResolver {
    /// Create a resolver using the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver searching the given `PATH`-style list
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
            probe_versions: false,
        }
    }

    /// Enable or disable `--version` probing (builder pattern)
    pub fn with_version_probe(mut self, enabled: bool) -> Self {
        self.probe_versions = enabled;
        self
    }

    /// Locate an executable by name
    pub fn find_executable(&self, name: &str) -> Option<PathBuf> {
        let candidate = Path::new(name);
        if candidate.components().count() > 1 {
            return is_executable(candidate).then(|| candidate.to_path_buf());
        }

        let search_path = self
            .search_path
            .clone()
            .or_else(|| std::env::var_os("PATH"))?;

        std::env::split_paths(&search_path)
            .flat_map(|dir| executable_names(name).into_iter().map(move |n| dir.join(n)))
            .find(|path| is_executable(path))
    }

    /// Run `<executable> --version` and extract the reported version
    pub fn probe_version(&self, executable: &Path) -> Option<Version> {
        let output = Command::new(executable)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .ok()?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push('\n');
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        extract_version(&text)
    }
}

impl ModuleResolver for PathResolver {
    fn is_available(&self, spec: &DependencySpec) -> bool {
        let Some(executable) = self.find_executable(&spec.module) else {
            return false;
        };
        if !self.probe_versions {
            return true;
        }

        // Tools that do not report a parseable version are taken at face value
        match self.probe_version(&executable) {
            Some(found) => spec.accepts(&found),
            None => true,
        }
    }
}

/// Extract the first version number from free-form tool output
pub fn extract_version(text: &str) -> Option<Version> {
    VERSION_RE
        .captures_iter(text)
        .filter_map(|caps| parse_version_lenient(&caps[1]).ok())
        .next()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(windows)]
fn executable_names(name: &str) -> Vec<String> {
    vec![format!("{}.exe", name), format!("{}.cmd", name), name.to_string()]
}

#[cfg(not(windows))]
fn executable_names(name: &str) -> Vec<String> {
    vec![name.to_string()]
}

/// Resolver backed by a fixed table of module name → present
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    present: HashMap<String, bool>,
}

impl MapResolver {
    /// Create an empty resolver; every lookup reports absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `module` is present
    pub fn set(&mut self, module: impl Into<String>, present: bool) {
        self.present.insert(module.into(), present);
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for MapResolver {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self {
            present: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl ModuleResolver for MapResolver {
    fn is_available(&self, spec: &DependencySpec) -> bool {
        self.present.get(&spec.module).copied().unwrap_or(false)
    }
}
