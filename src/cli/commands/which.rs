//! Which command implementation.
//!
//! The `buildprep which` command reports every requested tool, unlike
//! `verify`, which stops at the first missing one.

use crate::cli::args::WhichArgs;
use crate::config::{LocatorKind, Settings};
use crate::error::Result;
use crate::shell::ToolLocator;
use crate::ui::Logger;

use super::dispatcher::{Command, CommandResult};

/// The which command implementation.
pub struct WhichCommand {
    locator: LocatorKind,
    args: WhichArgs,
}

impl WhichCommand {
    /// Create a new which command.
    pub fn new(settings: &Settings, args: WhichArgs) -> Self {
        let locator = if args.scan_path {
            LocatorKind::Path
        } else {
            settings.locator
        };
        Self { locator, args }
    }

    /// Report each tool through `ui`, returning how many were missing.
    pub fn report(&self, locator: &dyn ToolLocator, ui: &mut dyn Logger) -> usize {
        let mut missing = 0;
        for tool in &self.args.tools {
            if locator.is_available(tool) {
                ui.success(&format!("{} found", tool));
            } else {
                ui.error(&format!("{} not found in PATH", tool));
                missing += 1;
            }
        }
        missing
    }
}

impl Command for WhichCommand {
    fn execute(&self, ui: &mut dyn Logger) -> Result<CommandResult> {
        let locator = self.locator.locator();
        if self.report(locator.as_ref(), ui) == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
