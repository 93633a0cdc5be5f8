//! Optional TOML configuration
//!
//! Lookup order: `--config <FILE>`, then `$MDVIEW_CONFIG`, then built-in
//! defaults. Every section is optional:
//!
//! ```toml
//! [installer]
//! program = "sudo"
//! args = ["apt-get", "satisfy", "-y"]
//! constraint = "{package} (>= {version})"
//!
//! [surface]
//! opener = "xdg-open"
//!
//! [check]
//! probe_versions = false
//!
//! [[dependency]]
//! module = "zenity"
//! package = "zenity"
//! min_version = "3.0"
//! ```

use crate::domain::{default_dependencies, parse_version_lenient, DependencySpec};
use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "MDVIEW_CONFIG";

/// How missing dependencies are installed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Package manager executable
    pub program: String,
    /// Fixed arguments placed before the package list
    pub args: Vec<String>,
    /// Per-package argument; `{package}` and `{version}` are substituted
    pub constraint: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: "apt-get".to_string(),
            args: vec!["satisfy".to_string(), "-y".to_string()],
            constraint: "{package} (>= {version})".to_string(),
        }
    }
}

/// How rendered documents are displayed
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceConfig {
    /// Program that opens an HTML file for display
    pub opener: String,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            opener: "xdg-open".to_string(),
        }
    }
}

/// How dependency availability is decided
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Also run `<module> --version` and enforce `min_version`
    pub probe_versions: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDependency {
    module: String,
    package: Option<String>,
    min_version: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    installer: InstallerConfig,
    #[serde(default)]
    surface: SurfaceConfig,
    #[serde(default)]
    check: CheckConfig,
    #[serde(rename = "dependency")]
    dependencies: Option<Vec<RawDependency>>,
}

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Required runtime components, in declaration order
    pub dependencies: Vec<DependencySpec>,
    /// Installer settings
    pub installer: InstallerConfig,
    /// Rendering surface settings
    pub surface: SurfaceConfig,
    /// Availability check settings
    pub check: CheckConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dependencies: default_dependencies(),
            installer: InstallerConfig::default(),
            surface: SurfaceConfig::default(),
            check: CheckConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from an explicit path, `$MDVIEW_CONFIG`, or defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::read(path, e))?;
        Self::from_toml(&content, path)
    }

    /// Parses configuration from TOML text; `origin` is used in error messages
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(content).map_err(|e| ConfigError::parse(origin, e.to_string()))?;

        if !raw.installer.constraint.contains("{package}") {
            return Err(ConfigError::InvalidConstraint {
                template: raw.installer.constraint,
            });
        }

        let dependencies = match raw.dependencies {
            None => default_dependencies(),
            Some(deps) if deps.is_empty() => {
                return Err(ConfigError::EmptyDependencies {
                    path: origin.to_path_buf(),
                })
            }
            Some(deps) => deps
                .into_iter()
                .map(resolve_dependency)
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self {
            dependencies,
            installer: raw.installer,
            surface: raw.surface,
            check: raw.check,
        })
    }
}

fn resolve_dependency(raw: RawDependency) -> Result<DependencySpec, ConfigError> {
    let min_version =
        parse_version_lenient(&raw.min_version).map_err(|e| ConfigError::InvalidVersion {
            module: raw.module.clone(),
            value: raw.min_version.clone(),
            message: e.to_string(),
        })?;
    let package = raw.package.unwrap_or_else(|| raw.module.clone());
    Ok(DependencySpec::new(raw.module, package, min_version))
}
