//! mdview - offline Markdown viewer
//!
//! On startup this tool:
//! - Verifies the external programs it needs are installed
//! - Offers to install the missing ones through the system package manager
//! - Then repeatedly opens Markdown files and shows them as styled HTML

use clap::Parser;
use mdview::bootstrap::{Bootstrapper, PathResolver, SystemInstaller, TerminalPrompt};
use mdview::cli::CliArgs;
use mdview::config::AppConfig;
use mdview::console::{Console, Verbosity};
use mdview::shell::{BrowserSurface, Viewer, ZenityPicker};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Handle version flag
    if args.print_version {
        println!("mdview {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    let console = Console::new(Verbosity::from_flags(args.verbose, args.quiet));

    // Every startup or shell failure maps to exit code 1
    match run(&args, console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            console.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

/// Main application logic
fn run(args: &CliArgs, console: Console) -> anyhow::Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;

    if args.verbose {
        eprintln!("mdview v{}", env!("CARGO_PKG_VERSION"));
        for spec in &config.dependencies {
            eprintln!("Requires: {}", spec);
        }
    }

    // Gate startup on the runtime dependencies
    let bootstrapper = Bootstrapper::new(
        config.dependencies,
        config.installer,
        PathResolver::new().with_version_probe(config.check.probe_versions),
        SystemInstaller::new(),
    )
    .with_console(console);
    bootstrapper.ensure(args.no_install, args.yes, &mut TerminalPrompt)?;

    let surface = BrowserSurface::new(config.surface.opener)?;
    let mut viewer = Viewer::new(ZenityPicker::new(), surface, console);
    let shown = viewer.run()?;

    if args.verbose {
        eprintln!("Documents shown: {}", shown);
    }
    Ok(())
}
