//! Run command implementation.
//!
//! The `buildprep run` command executes a shell command the way build
//! lanes do: the command line is always echoed, its output only when
//! verbose. A failing command fails the run with the command's exit code.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::shell::{run_command_with, CommandOptions};
use crate::ui::Logger;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    working_dir: PathBuf,
    verbose: bool,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(working_dir: &Path, verbose: bool, args: RunArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            verbose,
            args,
        }
    }

    fn options(&self) -> CommandOptions {
        let cwd = match &self.args.cwd {
            Some(dir) => self.working_dir.join(dir),
            None => self.working_dir.clone(),
        };
        CommandOptions {
            cwd: Some(cwd),
            ..Default::default()
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn Logger) -> Result<CommandResult> {
        let command = self.args.command_line();
        run_command_with(&command, &self.options(), self.verbose, ui)?;
        Ok(CommandResult::success())
    }
}
