//! Command-line interface for modreport.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ManifestArgs, ReportArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
