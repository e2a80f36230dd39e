//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_settings, Settings};
use crate::error::Result;
use crate::ui::Logger;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - Logger for all user-facing output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn Logger) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
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
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at the given working directory.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. `verify` and `which` load settings first. `run`
    /// loads them only when `--verbose` was not given.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn Logger) -> Result<CommandResult> {
        match &cli.command {
            Commands::Verify(args) => {
                let settings = self.settings(cli)?;
                let verbose = cli.verbose || settings.verbose;
                let cmd = super::verify::VerifyCommand::new(&settings, verbose, args.clone());
                cmd.execute(ui)
            }
            Commands::Run(args) => {
                // `verbose` is the only setting `run` reads.
                let verbose = cli.verbose || self.settings(cli)?.verbose;
                let cmd = super::run::RunCommand::new(&self.working_dir, verbose, args.clone());
                cmd.execute(ui)
            }
            Commands::Which(args) => {
                let settings = self.settings(cli)?;
                let cmd = super::which::WhichCommand::new(&settings, args.clone());
                cmd.execute(ui)
            }
            Commands::Extract(args) => {
                let cmd = super::extract::ExtractCommand::new(&self.working_dir, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }

    /// Load settings, resolving a relative `--config` against the working directory.
    fn settings(&self, cli: &Cli) -> Result<Settings> {
        let explicit = cli.config.as_ref().map(|p| self.working_dir.join(p));
        load_settings(explicit.as_deref(), &self.working_dir)
    }
}
