//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// modreport - Drupal module and Composer package report.
#[derive(Debug, Parser)]
#[command(name = "modreport")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .modreport/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Drupal docroot relative to the project root (auto-detected by default)
    #[arg(long, global = true, env = "MODREPORT_DOCROOT")]
    pub docroot: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the module report (default if no command specified)
    Report(ReportArgs),

    /// Print composer.json require lines for packages with an enabled module
    Manifest(ManifestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `report` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ReportArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `manifest` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ManifestArgs {
    /// Write the lines to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write the lines to the configured download file name
    #[arg(long, conflicts_with = "output")]
    pub download: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
