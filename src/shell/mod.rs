//! Shell command execution and tool lookup.

pub mod command;
pub mod locator;

pub use command::{
    execute, execute_streaming, run_command, run_command_with, CommandOptions, CommandResult,
    OutputLine,
};
pub use locator::{
    parse_system_path, resolve_tool_path, PathLocator, StaticLocator, ToolLocator, WhichLocator,
};
