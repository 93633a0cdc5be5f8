//! CLI argument parsing module for mdview

use clap::Parser;
use std::path::PathBuf;

/// Offline Markdown viewer
#[derive(Parser, Debug, Clone)]
#[command(name = "mdview", about = "Offline Markdown viewer")]
pub struct CliArgs {
    /// Do not offer to install missing dependencies; exit instead
    #[arg(long)]
    pub no_install: bool,

    /// Install missing dependencies without asking
    #[arg(short = 'y', long, conflicts_with = "no_install")]
    pub yes: bool,

    /// Path to a TOML config file (default: $MDVIEW_CONFIG, then built-in settings)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Print version
    #[arg(short = 'V', long = "version")]
    pub print_version: bool,
}
