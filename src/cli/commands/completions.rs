//! Shell completions generation.
//!
//! The `buildprep completions` command writes a completion script to stdout.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::Logger;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

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
}

/// Write the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "buildprep", out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn Logger) -> Result<CommandResult> {
        write_completions(self.args.shell, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}
