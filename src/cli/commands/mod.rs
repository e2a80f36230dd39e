//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations and resolves settings and the
//! effective verbosity once per invocation.

pub mod completions;
pub mod dispatcher;
pub mod extract;
pub mod run;
pub mod verify;
pub mod which;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
