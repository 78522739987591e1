//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, ReportArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectOptions;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    options: ProjectOptions,
}

impl CommandDispatcher {
    /// Create a dispatcher using the global flags of `cli`.
    pub fn from_cli(project_root: PathBuf, cli: &Cli) -> Self {
        let mut options = ProjectOptions::new(project_root);
        options.config = cli.config.clone();
        options.docroot = cli.docroot.clone();
        Self { options }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Report(args)) => {
                let cmd = super::report::ReportCommand::new(self.options.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Manifest(args)) => {
                let cmd =
                    super::manifest::ManifestCommand::new(self.options.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::report::ReportCommand::new(self.options.clone(), ReportArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
