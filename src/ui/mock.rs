//! Mock logger implementation for testing.
//!
//! `MockLogger` implements the [`Logger`] trait and captures every emission
//! per channel, plus the overall emission order, for later assertion.
//!
//! # Example
//!
//! ```
//! use buildprep::ui::{Logger, MockLogger};
//!
//! let mut ui = MockLogger::new();
//! ui.info("Fetching sources");
//! ui.success("Done!");
//!
//! assert!(ui.infos().contains(&"Fetching sources".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use super::Logger;

/// Channel a captured message was emitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Debug,
    Info,
    Success,
    Error,
    Command,
    CommandOutput,
}

/// Mock logger for testing.
#[derive(Debug, Default)]
pub struct MockLogger {
    debugs: Vec<String>,
    infos: Vec<String>,
    successes: Vec<String>,
    errors: Vec<String>,
    commands: Vec<String>,
    command_outputs: Vec<String>,
    log: Vec<(Channel, String)>,
}

impl MockLogger {
    /// Create an empty mock logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured debug messages (only those emitted while verbose).
    pub fn debugs(&self) -> &[String] {
        &self.debugs
    }

    /// Get all captured info messages.
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all echoed commands.
    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    /// Get all echoed command output.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Every emission in order, tagged by channel.
    pub fn log(&self) -> &[(Channel, String)] {
        &self.log
    }

    pub fn has_debug(&self, msg: &str) -> bool {
        self.debugs.iter().any(|m| m.contains(msg))
    }

    pub fn has_info(&self, msg: &str) -> bool {
        self.infos.iter().any(|m| m.contains(msg))
    }

    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    pub fn has_command(&self, command: &str) -> bool {
        self.commands.iter().any(|c| c == command)
    }

    fn record(&mut self, channel: Channel, msg: &str) {
        let msg = msg.to_string();
        self.log.push((channel, msg.clone()));
        match channel {
            Channel::Debug => self.debugs.push(msg),
            Channel::Info => self.infos.push(msg),
            Channel::Success => self.successes.push(msg),
            Channel::Error => self.errors.push(msg),
            Channel::Command => self.commands.push(msg),
            Channel::CommandOutput => self.command_outputs.push(msg),
        }
    }
}

impl Logger for MockLogger {
    fn debug(&mut self, msg: &str, verbose: bool) {
        if verbose {
            self.record(Channel::Debug, msg);
        }
    }

    fn info(&mut self, msg: &str) {
        self.record(Channel::Info, msg);
    }

    fn success(&mut self, msg: &str) {
        self.record(Channel::Success, msg);
    }

    fn error(&mut self, msg: &str) {
        self.record(Channel::Error, msg);
    }

    fn command(&mut self, command: &str) {
        self.record(Channel::Command, command);
    }

    fn command_output(&mut self, output: &str) {
        self.record(Channel::CommandOutput, output);
    }
}
