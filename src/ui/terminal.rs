//! Logger backed by the process's standard streams.

use console::Term;
use std::io::Write;

use super::{should_use_colors, Logger, Theme};

/// Writes debug, info, success and command echoes to stdout and errors to stderr.
///
/// Every emission is also recorded as a `debug` event under the
/// `buildprep::ui` target, so only `--debug` runs see it twice.
pub struct ConsoleLogger {
    out: Term,
    err: Term,
    theme: Theme,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Create a console logger, with colors when stdout is a terminal.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a console logger with an explicit theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Logger for ConsoleLogger {
    fn debug(&mut self, msg: &str, verbose: bool) {
        if verbose {
            tracing::debug!(target: "buildprep::ui", "{}", msg);
            writeln!(self.out, "{}", self.theme.format_debug(msg)).ok();
        }
    }

    fn info(&mut self, msg: &str) {
        tracing::debug!(target: "buildprep::ui", "{}", msg);
        writeln!(self.out, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        tracing::debug!(target: "buildprep::ui", "{}", msg);
        writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        tracing::debug!(target: "buildprep::ui", "{}", msg);
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn command(&mut self, command: &str) {
        tracing::debug!(target: "buildprep::ui", command, "running command");
        writeln!(self.out, "{}", self.theme.format_command(command)).ok();
    }

    fn command_output(&mut self, output: &str) {
        write!(self.out, "{}", output).ok();
        if !output.is_empty() && !output.ends_with('\n') {
            writeln!(self.out).ok();
        }
        self.out.flush().ok();
    }
}
