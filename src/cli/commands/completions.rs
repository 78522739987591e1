//! Shell completions generation.
//!
//! The `modreport completions` command prints a completion script to stdout.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }

    fn script(&self) -> crate::error::Result<String> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "modreport", &mut buf);
        String::from_utf8(buf).map_err(|e| anyhow::Error::from(e).into())
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let script = self.script()?;
        ui.data(&script);
        Ok(CommandResult::success())
    }
}
