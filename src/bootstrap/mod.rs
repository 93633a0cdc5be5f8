//! Startup gate for runtime dependencies
//!
//! This module provides:
//! - A pure availability check over a `ModuleResolver`
//! - Deterministic install command construction
//! - Confirmation, installation and a single re-check
//!
//! It is the only part of the program allowed to run the package manager.
//! Every failure is reported as a `BootstrapError`, which `main` turns into
//! exit code 1.

mod installer;
mod prompt;
mod resolver;

pub use installer::{
    render_constraint, InstallCommand, InstallOutcome, InstallRunner, SystemInstaller,
};
pub use prompt::{Confirm, TerminalPrompt};
pub use resolver::{extract_version, MapResolver, ModuleResolver, PathResolver};

use crate::config::InstallerConfig;
use crate::console::Console;
use crate::domain::{BootstrapResult, DependencySpec, InstallFailure};
use crate::error::BootstrapError;
use crate::progress::Spinner;
use std::collections::HashSet;
use std::io::{self, IsTerminal};

impl<T: ModuleResolver + ?Sized> ModuleResolver for &T {
    fn is_available(&self, spec: &DependencySpec) -> bool {
        (**self).is_available(spec)
    }
}

impl<T: InstallRunner + ?Sized> InstallRunner for &T {
    fn spawn_install(&self, command: &InstallCommand) -> InstallOutcome {
        (**self).spawn_install(command)
    }
}

/// Checks, and on request installs, the declared runtime dependencies
pub struct Bootstrapper<R, I> {
    dependencies: Vec<DependencySpec>,
    installer: InstallerConfig,
    resolver: R,
    runner: I,
    console: Console,
}

impl<R: ModuleResolver, I: InstallRunner> Bootstrapper<R, I> {
    /// Create a bootstrapper for `dependencies`, in declaration order
    pub fn new(
        dependencies: Vec<DependencySpec>,
        installer: InstallerConfig,
        resolver: R,
        runner: I,
    ) -> Self {
        Self {
            dependencies,
            installer,
            resolver,
            runner,
            console: Console::default(),
        }
    }

    /// Use `console` for status output (builder pattern)
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    /// Check every dependency without side effects
    ///
    /// All missing dependencies are reported, not just the first one.
    pub fn check(&self) -> BootstrapResult {
        let missing: Vec<DependencySpec> = self
            .dependencies
            .iter()
            .filter(|spec| !self.resolver.is_available(spec))
            .cloned()
            .collect();

        if missing.is_empty() {
            BootstrapResult::AllSatisfied
        } else {
            BootstrapResult::MissingSet(missing)
        }
    }

    /// Build the package manager invocation for `missing`
    ///
    /// Packages appear once each, in declaration order, regardless of the
    /// order or duplication in `missing`.
    pub fn build_install_command(&self, missing: &[DependencySpec]) -> InstallCommand {
        let wanted: HashSet<&str> = missing.iter().map(|d| d.module.as_str()).collect();
        let mut seen: HashSet<&str> = HashSet::new();

        let declared = self
            .dependencies
            .iter()
            .filter(|d| wanted.contains(d.module.as_str()));
        let undeclared = missing
            .iter()
            .filter(|d| !self.dependencies.iter().any(|known| known.module == d.module));

        let packages: Vec<&DependencySpec> = declared
            .chain(undeclared)
            .filter(|d| seen.insert(d.package.as_str()))
            .collect();

        InstallCommand::build(&self.installer, &packages)
    }

    /// Optionally confirm, then install `missing` and check again
    ///
    /// Without `auto_approve` the user must answer yes; anything else is
    /// `InstallDeclined` and nothing is run. The install runs to completion
    /// with no timeout.
    pub fn prompt_and_install(
        &self,
        missing: &[DependencySpec],
        auto_approve: bool,
        prompt: &mut dyn Confirm,
    ) -> Result<BootstrapResult, BootstrapError> {
        let command = self.build_install_command(missing);

        if !auto_approve && !prompt.confirm("Install the missing dependencies now?") {
            return Err(BootstrapError::InstallDeclined {
                command: command.to_string(),
            });
        }

        self.console.info(&format!("Running {}", command));
        let spinner = Spinner::start(
            self.console.decorations_enabled() && io::stderr().is_terminal(),
            "Installing dependencies...",
        );
        let outcome = self.runner.spawn_install(&command);
        spinner.stop();

        if !outcome.success() {
            self.report_installer_output(&outcome);
            return Ok(BootstrapResult::InstallFailed(InstallFailure::ExitStatus {
                code: outcome.code,
                stdout: outcome.stdout,
                stderr: outcome.stderr,
            }));
        }
        self.console.detail(outcome.stdout.trim_end());

        match self.check() {
            BootstrapResult::AllSatisfied => {
                self.console.success("Dependencies installed");
                Ok(BootstrapResult::AllSatisfied)
            }
            other => Ok(BootstrapResult::InstallFailed(InstallFailure::StillMissing(
                other.missing().to_vec(),
            ))),
        }
    }

    /// Run the whole startup gate
    ///
    /// Returns `Ok(())` only when every dependency is available. With
    /// `no_install` set, a missing dependency fails immediately and nothing
    /// is spawned.
    pub fn ensure(
        &self,
        no_install: bool,
        auto_approve: bool,
        prompt: &mut dyn Confirm,
    ) -> Result<(), BootstrapError> {
        let result = self.check();
        if result.is_satisfied() {
            self.console.detail("All runtime dependencies are available");
            return Ok(());
        }

        let missing = result.missing().to_vec();
        let command = self.build_install_command(&missing);

        self.console.error("missing dependencies required to run mdview:");
        for spec in &missing {
            self.console.info(&format!("  - {}", spec));
        }
        self.console.info("Install them in your environment by running:");
        self.console.command(&command.to_string());

        if no_install {
            return Err(BootstrapError::DependencyMissing {
                missing,
                command: command.to_string(),
            });
        }

        self.console
            .warn("installing packages modifies your system; review the command above first");

        match self.prompt_and_install(&missing, auto_approve, prompt)? {
            BootstrapResult::AllSatisfied => Ok(()),
            BootstrapResult::InstallFailed(failure) => Err(BootstrapError::InstallFailed {
                command: command.to_string(),
                failure,
            }),
            BootstrapResult::MissingSet(missing) => Err(BootstrapError::DependencyMissing {
                missing,
                command: command.to_string(),
            }),
        }
    }

    fn report_installer_output(&self, outcome: &InstallOutcome) {
        self.console.error("installation failed. Output:");
        for stream in [&outcome.stdout, &outcome.stderr] {
            let text = stream.trim_end();
            if !text.is_empty() {
                self.console.info(text);
            }
        }
    }
}
