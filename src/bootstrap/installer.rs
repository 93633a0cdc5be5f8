//! Package manager integration for installing missing dependencies
//!
//! This module provides:
//! - Construction of the install command line
//! - The `InstallRunner` seam and its process-spawning implementation

use crate::config::InstallerConfig;
use crate::domain::DependencySpec;
use std::fmt;
use std::process::{Command, Stdio};

/// A fully built package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    /// Executable to run
    pub program: String,
    /// Arguments, package constraints last
    pub args: Vec<String>,
}

impl InstallCommand {
    /// Build the command for the given packages
    ///
    /// `packages` must already be deduplicated and in declaration order.
    pub fn build(installer: &InstallerConfig, packages: &[&DependencySpec]) -> Self {
        let mut args = installer.args.clone();
        args.extend(
            packages
                .iter()
                .map(|spec| render_constraint(&installer.constraint, spec)),
        );
        Self {
            program: installer.program.clone(),
            args,
        }
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Substitute `{package}` and `{version}` into a constraint template
pub fn render_constraint(template: &str, spec: &DependencySpec) -> String {
    template
        .replace("{package}", &spec.package)
        .replace("{version}", &spec.min_version.to_string())
}

fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Outcome of running the install command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    /// Exit code, `None` if the process could not be started or was killed
    pub code: Option<i32>,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
}

impl InstallOutcome {
    /// Whether the installer reported success
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Trait for running the install command
pub trait InstallRunner {
    /// Run `command` to completion
    fn spawn_install(&self, command: &InstallCommand) -> InstallOutcome;
}

/// Default runner that executes the real package manager
#[derive(Debug, Default)]
pub struct SystemInstaller;

impl SystemInstaller {
    /// Create a new system installer
    pub fn new() -> Self {
        Self
    }
}

impl InstallRunner for SystemInstaller {
    fn spawn_install(&self, command: &InstallCommand) -> InstallOutcome {
        // stdin stays attached so sudo and friends can still ask for a password
        let result = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::inherit())
            .output();

        match result {
            Ok(output) => InstallOutcome {
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(e) => InstallOutcome {
                code: None,
                stdout: String::new(),
                stderr: format!("Failed to execute command: {}", e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn apt() -> InstallerConfig {
        InstallerConfig::default()
    }

    fn cargo() -> InstallerConfig {
        InstallerConfig {
            program: "cargo".to_string(),
            args: vec!["install".to_string()],
            constraint: "{package}@>={version}".to_string(),
        }
    }

    #[test]
    fn test_render_constraint() {
        let spec = DependencySpec::new("xdg-open", "xdg-utils", Version::new(1, 1, 0));
        assert_eq!(
            render_constraint("{package} (>= {version})", &spec),
            "xdg-utils (>= 1.1.0)"
        );
        assert_eq!(render_constraint("{package}", &spec), "xdg-utils");
    }

    #[test]
    fn test_build_apt_command() {
        let zenity = DependencySpec::new("zenity", "zenity", Version::new(3, 0, 0));
        let xdg = DependencySpec::new("xdg-open", "xdg-utils", Version::new(1, 1, 0));
        let cmd = InstallCommand::build(&apt(), &[&zenity, &xdg]);

        assert_eq!(cmd.program, "apt-get");
        assert_eq!(
            cmd.args,
            vec!["satisfy", "-y", "zenity (>= 3.0.0)", "xdg-utils (>= 1.1.0)"]
        );
        assert_eq!(
            cmd.to_string(),
            "apt-get satisfy -y 'zenity (>= 3.0.0)' 'xdg-utils (>= 1.1.0)'"
        );
    }

    #[test]
    fn test_build_cargo_command() {
        let spec = DependencySpec::new("mdbook", "mdbook", Version::new(0, 4, 0));
        let cmd = InstallCommand::build(&cargo(), &[&spec]);
        assert_eq!(cmd.args, vec!["install", "mdbook@>=0.4.0"]);
        assert_eq!(cmd.to_string(), "cargo install 'mdbook@>=0.4.0'");
    }

    #[test]
    fn test_shell_quote() {
        assert_eq!(shell_quote("plain-arg"), "plain-arg");
        assert_eq!(shell_quote(""), "''");
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_install_outcome_success() {
        let ok = InstallOutcome {
            code: Some(0),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(ok.success());

        let killed = InstallOutcome {
            code: None,
            ..ok.clone()
        };
        assert!(!killed.success());
    }

    #[test]
    fn test_system_installer_missing_program() {
        let cmd = InstallCommand {
            program: "mdview-no-such-package-manager".to_string(),
            args: vec![],
        };
        let outcome = SystemInstaller::new().spawn_install(&cmd);
        assert_eq!(outcome.code, None);
        assert!(outcome.stderr.contains("Failed to execute command"));
    }
}
