//! Runtime dependency declarations

use semver::Version;
use std::fmt;

/// A runtime component the viewer needs before it can render anything
///
/// The probe name (what is looked up at run time) and the install package
/// name are tracked separately because they routinely differ, e.g. the
/// `xdg-open` command ships in the `xdg-utils` package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySpec {
    /// Name probed at run time (a command on `PATH`)
    pub module: String,
    /// Identifier handed to the package manager
    pub package: String,
    /// Minimum acceptable version
    pub min_version: Version,
}

impl DependencySpec {
    /// Creates a new dependency spec
    pub fn new(
        module: impl Into<String>,
        package: impl Into<String>,
        min_version: Version,
    ) -> Self {
        Self {
            module: module.into(),
            package: package.into(),
            min_version,
        }
    }

    /// Returns true if `found` satisfies the minimum version
    pub fn accepts(&self, found: &Version) -> bool {
        found >= &self.min_version
    }
}

impl fmt::Display for DependencySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module == self.package {
            write!(f, "{} >= {}", self.module, self.min_version)
        } else {
            write!(
                f,
                "{} ({} >= {})",
                self.module, self.package, self.min_version
            )
        }
    }
}

/// Parses a version, padding missing minor/patch components with zeros
///
/// Tools commonly report `3.44` or `1.1`; both are accepted here.
pub fn parse_version_lenient(raw: &str) -> Result<Version, semver::Error> {
    let raw = raw.trim();
    let raw = raw.strip_prefix('v').unwrap_or(raw);
    let core_len = raw.find(['-', '+']).unwrap_or(raw.len());
    let (core, rest) = raw.split_at(core_len);
    let padded = match core.matches('.').count() {
        0 => format!("{}.0.0{}", core, rest),
        1 => format!("{}.0{}", core, rest),
        _ => raw.to_string(),
    };
    Version::parse(&padded)
}

/// The components required by the default viewer shell, in declaration order
pub fn default_dependencies() -> Vec<DependencySpec> {
    vec![
        DependencySpec::new("zenity", "zenity", Version::new(3, 0, 0)),
        DependencySpec::new("xdg-open", "xdg-utils", Version::new(1, 1, 0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_spec_new() {
        let spec = DependencySpec::new("xdg-open", "xdg-utils", Version::new(1, 1, 0));
        assert_eq!(spec.module, "xdg-open");
        assert_eq!(spec.package, "xdg-utils");
        assert_eq!(spec.min_version, Version::new(1, 1, 0));
    }

    #[test]
    fn test_accepts() {
        let spec = DependencySpec::new("zenity", "zenity", Version::new(3, 0, 0));
        assert!(spec.accepts(&Version::new(3, 0, 0)));
        assert!(spec.accepts(&Version::new(4, 0, 1)));
        assert!(!spec.accepts(&Version::new(2, 32, 0)));
    }

    #[test]
    fn test_display_same_names() {
        let spec = DependencySpec::new("zenity", "zenity", Version::new(3, 0, 0));
        assert_eq!(spec.to_string(), "zenity >= 3.0.0");
    }

    #[test]
    fn test_display_distinct_names() {
        let spec = DependencySpec::new("xdg-open", "xdg-utils", Version::new(1, 1, 0));
        assert_eq!(spec.to_string(), "xdg-open (xdg-utils >= 1.1.0)");
    }

    #[test]
    fn test_parse_version_lenient() {
        assert_eq!(parse_version_lenient("3").unwrap(), Version::new(3, 0, 0));
        assert_eq!(parse_version_lenient("3.44").unwrap(), Version::new(3, 44, 0));
        assert_eq!(parse_version_lenient("v1.1.3").unwrap(), Version::new(1, 1, 3));
        assert_eq!(
            parse_version_lenient("4.0-rc1").unwrap(),
            Version::parse("4.0.0-rc1").unwrap()
        );
        assert!(parse_version_lenient("latest").is_err());
        assert!(parse_version_lenient("").is_err());
    }

    #[test]
    fn test_default_dependencies_order() {
        let deps = default_dependencies();
        let modules: Vec<_> = deps.iter().map(|d| d.module.as_str()).collect();
        assert_eq!(modules, vec!["zenity", "xdg-open"]);
    }
}
