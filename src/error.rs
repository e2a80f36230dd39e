//! Error types for buildprep operations.
//!
//! This module defines [`BuildprepError`], the error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Missing tools, failed commands and explicit aborts are fatal and are
//!   returned to the caller untouched
//! - An absent option bag or an empty prefix is not an error; extraction
//!   returns an empty result instead
//! - Use `anyhow::Error` (via `BuildprepError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for buildprep operations.
#[derive(Debug, Error)]
pub enum BuildprepError {
    /// A required tool is not resolvable on the search path.
    #[error("Required tool '{tool}' not found in PATH")]
    MissingTool { tool: String },

    /// Shell command exited non-zero, died by signal, or failed to spawn.
    #[error("Command failed with {}: {command}", describe_exit(.code))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        /// Combined captured output. Empty unless the command ran verbose.
        output: String,
    },

    /// Explicit abort raised through [`crate::ui::abort`].
    #[error("{message}")]
    Aborted { message: String },

    /// Settings file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a settings or option file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Malformed option input given on the command line.
    #[error("Invalid option input: {message}")]
    InvalidOption { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BuildprepError {
    /// Whether the message for this error has already been shown to the user.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Aborted { .. })
    }

    /// Process exit code for this error.
    ///
    /// A failed command passes its own exit code through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CommandFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// [`exit_code`](Self::exit_code) narrowed to a process exit status.
    /// Never 0.
    pub fn exit_status(&self) -> u8 {
        match exit_status(self.exit_code()) {
            0 => 1,
            status => status,
        }
    }
}

/// Narrow an exit code to a process exit status. Codes that do not fit in
/// a byte become 1 instead of wrapping.
pub fn exit_status(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code".to_string(),
    }
}

/// Result type alias for buildprep operations.
pub type Result<T> = std::result::Result<T, BuildprepError>;
