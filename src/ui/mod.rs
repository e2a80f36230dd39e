//! User-facing message output.
//!
//! This module provides:
//! - [`Logger`] trait, the output sink every component writes through
//! - [`ConsoleLogger`] for the process's standard streams
//! - [`MockLogger`] for capturing output in tests
//! - [`abort`] for raising a fatal, user-facing error
//!
//! A single logger is created at startup and passed down as
//! `&mut dyn Logger`; nothing in the crate writes to a global sink.
//!
//! # Example
//!
//! ```
//! use buildprep::ui::{Logger, MockLogger};
//!
//! let mut ui = MockLogger::new();
//! ui.debug("Resolving toolchain", false);
//! ui.success("Toolchain ready");
//!
//! assert!(ui.debugs().is_empty());
//! assert!(ui.has_success("Toolchain ready"));
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use terminal::ConsoleLogger;
pub use mock::MockLogger;
pub use theme::{should_use_colors, Theme};

use crate::error::{BuildprepError, Result};

/// Severity-tagged message output.
///
/// This trait allows mocking the output sink in tests.
pub trait Logger {
    /// Display a debug message, only when `verbose` is set.
    fn debug(&mut self, msg: &str, verbose: bool);

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Echo a command line before it runs.
    fn command(&mut self, command: &str);

    /// Echo output produced by a command.
    fn command_output(&mut self, output: &str);
}

/// Report `message` as an error and return it as a fatal [`BuildprepError::Aborted`].
///
/// Never returns `Ok`; call as `return abort(ui, "...")`.
pub fn abort<T>(ui: &mut dyn Logger, message: &str) -> Result<T> {
    ui.error(message);
    Err(BuildprepError::Aborted {
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_reports_and_returns_error() {
        let mut ui = MockLogger::new();

        let result: Result<()> = abort(&mut ui, "Signing identity missing");

        assert!(ui.has_error("Signing identity missing"));
        match result {
            Err(BuildprepError::Aborted { message }) => {
                assert_eq!(message, "Signing identity missing")
            }
            other => panic!("expected Aborted, got {:?}", other),
        }
    }

    #[test]
    fn abort_short_circuits_caller() {
        fn lane(ui: &mut dyn Logger, arch: &str) -> Result<&'static str> {
            if arch != "arm64" {
                return abort(ui, &format!("Unsupported architecture '{}'", arch));
            }
            ui.info("Building arm64");
            Ok("built")
        }

        let mut ui = MockLogger::new();
        assert!(lane(&mut ui, "mips").is_err());
        assert!(ui.infos().is_empty());

        assert_eq!(lane(&mut ui, "arm64").unwrap(), "built");
        assert!(ui.has_info("Building arm64"));
    }
}
