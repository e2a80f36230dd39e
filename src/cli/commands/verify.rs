//! Verify command implementation.
//!
//! The `buildprep verify` command checks that every required tool is on
//! PATH, stopping at the first missing one.

use crate::cli::args::VerifyArgs;
use crate::config::{LocatorKind, Settings};
use crate::environment::EnvironmentVerifier;
use crate::error::Result;
use crate::ui::Logger;

use super::dispatcher::{Command, CommandResult};

/// The verify command implementation.
pub struct VerifyCommand {
    tools: Vec<String>,
    locator: LocatorKind,
    verbose: bool,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(settings: &Settings, verbose: bool, args: VerifyArgs) -> Self {
        let locator = if args.scan_path {
            LocatorKind::Path
        } else {
            settings.locator
        };

        Self {
            tools: settings.required_tools.clone(),
            locator,
            verbose,
        }
    }

    /// Locator this command will use.
    pub fn locator_kind(&self) -> LocatorKind {
        self.locator
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn Logger) -> Result<CommandResult> {
        let verifier = EnvironmentVerifier::with_tools(self.locator.locator(), &self.tools);
        verifier.verify(ui, self.verbose)?;
        Ok(CommandResult::success())
    }
}
