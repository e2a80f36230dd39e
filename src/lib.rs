//! Buildprep - build environment verification and lane utilities.
//!
//! Buildprep checks that the external tools a build needs are on `PATH`,
//! runs shell commands with controllable verbosity, and extracts
//! namespaced options from the flat option bags build lanes pass around.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading
//! - [`environment`] - Required-tool verification
//! - [`error`] - Error types and result aliases
//! - [`options`] - Option bags and prefixed option extraction
//! - [`shell`] - Shell command execution and tool lookup
//! - [`ui`] - Leveled user-facing output
//!
//! # Example
//!
//! ```
//! use buildprep::environment::EnvironmentVerifier;
//! use buildprep::shell::StaticLocator;
//! use buildprep::ui::MockLogger;
//!
//! let verifier = EnvironmentVerifier::new(StaticLocator::with_tools(["python3"]));
//! let mut ui = MockLogger::new();
//!
//! let err = verifier.verify(&mut ui, false).unwrap_err();
//! assert_eq!(err.to_string(), "Required tool 'gclient' not found in PATH");
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod options;
pub mod shell;
pub mod ui;

pub use error::{BuildprepError, Result};
