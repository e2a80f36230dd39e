//! Shell command execution.

use crate::error::{BuildprepError, Result};
use crate::ui::Logger;
use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
        }
    }

    /// Stdout followed by stderr.
    pub fn combined_output(&self) -> String {
        let mut combined = self.stdout.clone();
        if !combined.is_empty() && !combined.ends_with('\n') && !self.stderr.is_empty() {
            combined.push('\n');
        }
        combined.push_str(&self.stderr);
        combined
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Environment variables (merged with system env).
    pub env: HashMap<String, String>,
}

/// A line of output from a streaming command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Stdout(String),
    Stderr(String),
}

impl OutputLine {
    /// The line text, without its trailing newline.
    pub fn text(&self) -> &str {
        match self {
            Self::Stdout(line) | Self::Stderr(line) => line,
        }
    }
}

/// Build the shell invocation for `command`.
fn shell_command(command: &str, options: &CommandOptions) -> Command {
    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    tracing::debug!(shell = %shell, command, "spawning command");
    cmd
}

fn spawn_failed(command: &str, error: &std::io::Error) -> BuildprepError {
    tracing::debug!(command, error = %error, "command failed to spawn");
    BuildprepError::CommandFailed {
        command: command.to_string(),
        code: None,
        output: String::new(),
    }
}

fn finish(
    command: &str,
    code: Option<i32>,
    success: bool,
    stdout: String,
    stderr: String,
    duration: Duration,
) -> CommandResult {
    tracing::debug!(
        command,
        code = ?code,
        elapsed_ms = duration.as_millis() as u64,
        "command finished"
    );

    if success {
        CommandResult::success(stdout, stderr, duration)
    } else {
        CommandResult::failure(code, stdout, stderr, duration)
    }
}

/// Execute a shell command, capturing its output.
///
/// A command that runs but exits non-zero is returned as `Ok` with
/// `success == false`. Only a spawn failure is an `Err`.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();

    let output = shell_command(command, options)
        .output()
        .map_err(|e| spawn_failed(command, &e))?;

    Ok(finish(
        command,
        output.status.code(),
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        start.elapsed(),
    ))
}

/// Execute a shell command, handing each output line to `callback` as it
/// arrives.
///
/// Both streams are still captured into the returned [`CommandResult`].
/// The callback runs on the calling thread.
pub fn execute_streaming<F>(
    command: &str,
    options: &CommandOptions,
    mut callback: F,
) -> Result<CommandResult>
where
    F: FnMut(OutputLine),
{
    let start = Instant::now();

    let mut child = shell_command(command, options)
        .spawn()
        .map_err(|e| spawn_failed(command, &e))?;

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        return Err(BuildprepError::CommandFailed {
            command: command.to_string(),
            code: None,
            output: String::new(),
        });
    };

    let (tx, rx) = mpsc::channel();
    let tx_stdout = tx.clone();
    let tx_stderr = tx;

    let stdout_handle = thread::spawn(move || {
        let reader = BufReader::new(stdout);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stdout.send(OutputLine::Stdout(line));
        }
        output
    });

    let stderr_handle = thread::spawn(move || {
        let reader = BufReader::new(stderr);
        let mut output = String::new();
        for line in reader.lines().map_while(std::result::Result::ok) {
            output.push_str(&line);
            output.push('\n');
            let _ = tx_stderr.send(OutputLine::Stderr(line));
        }
        output
    });

    for line in rx {
        callback(line);
    }

    let stdout_output = stdout_handle.join().unwrap_or_default();
    let stderr_output = stderr_handle.join().unwrap_or_default();

    let status = child.wait().map_err(|e| spawn_failed(command, &e))?;

    Ok(finish(
        command,
        status.code(),
        status.success(),
        stdout_output,
        stderr_output,
        start.elapsed(),
    ))
}

/// Run a command for a build lane.
///
/// The command line is always echoed before it runs. When `verbose` is set
/// its output is echoed line by line while it runs. Any failure (spawn
/// error, non-zero exit, signal) is returned as
/// [`BuildprepError::CommandFailed`].
pub fn run_command(command: &str, verbose: bool, ui: &mut dyn Logger) -> Result<CommandResult> {
    run_command_with(command, &CommandOptions::default(), verbose, ui)
}

/// [`run_command`] with a working directory and extra environment.
pub fn run_command_with(
    command: &str,
    options: &CommandOptions,
    verbose: bool,
    ui: &mut dyn Logger,
) -> Result<CommandResult> {
    ui.command(command);

    let result = if verbose {
        execute_streaming(command, options, |line| ui.command_output(line.text()))?
    } else {
        execute(command, options)?
    };

    if !result.success {
        return Err(BuildprepError::CommandFailed {
            command: command.to_string(),
            code: result.exit_code,
            output: if verbose {
                result.combined_output()
            } else {
                String::new()
            },
        });
    }

    Ok(result)
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockLogger;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello", &CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
        assert!(result.stdout.contains("hello"));
    }

    #[test]
    fn execute_failing_command_is_ok_with_failure() {
        let result = execute("exit 1", &CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(1));
    }

    #[test]
    fn execute_with_env() {
        let mut options = CommandOptions::default();
        options
            .env
            .insert("MY_VAR".to_string(), "my_value".to_string());

        let cmd = if cfg!(target_os = "windows") {
            "echo %MY_VAR%"
        } else {
            "echo $MY_VAR"
        };

        let result = execute(cmd, &options).unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("my_value"));
    }

    #[test]
    fn execute_with_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };

        let cmd = if cfg!(target_os = "windows") {
            "cd"
        } else {
            "pwd"
        };

        let result = execute(cmd, &options).unwrap();

        assert!(result.success);
    }

    #[test]
    fn execute_streaming_captures_both_streams() {
        let mut lines = Vec::new();
        let cmd = if cfg!(target_os = "windows") {
            "echo line1 && echo oops 1>&2"
        } else {
            "echo line1; echo oops >&2"
        };

        let result = execute_streaming(cmd, &CommandOptions::default(), |line| lines.push(line))
            .unwrap();

        assert!(result.success);
        assert!(result.stdout.contains("line1"));
        assert!(result.stderr.contains("oops"));
        assert!(lines.iter().any(|l| matches!(l, OutputLine::Stdout(t) if t.trim() == "line1")));
        assert!(lines.iter().any(|l| matches!(l, OutputLine::Stderr(t) if t.trim() == "oops")));
    }

    #[test]
    #[cfg(unix)]
    fn execute_streaming_delivers_lines_before_exit() {
        let start = Instant::now();
        let mut first_line_at = None;

        let result = execute_streaming(
            "echo early; sleep 1; echo late",
            &CommandOptions::default(),
            |line| {
                if line.text() == "early" {
                    first_line_at = Some(start.elapsed());
                }
            },
        )
        .unwrap();

        let first_line_at = first_line_at.unwrap();
        assert!(result.duration >= Duration::from_millis(900));
        assert!(first_line_at < Duration::from_millis(700));
    }

    #[test]
    fn execute_streaming_reports_exit_code() {
        let result = execute_streaming("exit 5", &CommandOptions::default(), |_| {}).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(5));
    }

    #[test]
    #[cfg(unix)]
    fn run_command_verbose_echoes_each_line() {
        let mut ui = MockLogger::new();

        run_command("echo first; echo second", true, &mut ui).unwrap();

        assert_eq!(
            ui.command_outputs(),
            &["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn run_command_echoes_command_but_not_output_when_quiet() {
        let mut ui = MockLogger::new();

        let result = run_command("echo quiet-output", false, &mut ui).unwrap();

        assert!(ui.has_command("echo quiet-output"));
        assert!(ui.command_outputs().is_empty());
        assert!(result.stdout.contains("quiet-output"));
    }

    #[test]
    fn run_command_echoes_output_when_verbose() {
        let mut ui = MockLogger::new();

        run_command("echo loud-output", true, &mut ui).unwrap();

        assert_eq!(ui.commands(), &["echo loud-output".to_string()]);
        assert!(ui
            .command_outputs()
            .iter()
            .any(|o| o.contains("loud-output")));
    }

    #[test]
    fn run_command_echoes_before_output() {
        let mut ui = MockLogger::new();

        run_command("echo ordered", true, &mut ui).unwrap();

        let first = &ui.log()[0];
        assert_eq!(first.1, "echo ordered");
    }

    #[test]
    fn run_command_propagates_non_zero_exit() {
        let mut ui = MockLogger::new();

        let err = run_command("exit 3", false, &mut ui).unwrap_err();

        match err {
            BuildprepError::CommandFailed {
                command,
                code,
                output,
            } => {
                assert_eq!(command, "exit 3");
                assert_eq!(code, Some(3));
                assert!(output.is_empty());
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
        assert!(ui.has_command("exit 3"));
    }

    #[test]
    #[cfg(unix)]
    fn run_command_failure_carries_output_when_verbose() {
        let mut ui = MockLogger::new();

        let err = run_command("echo partial; echo broken >&2; exit 2", true, &mut ui).unwrap_err();

        match err {
            BuildprepError::CommandFailed { code, output, .. } => {
                assert_eq!(code, Some(2));
                assert!(output.contains("partial"));
                assert!(output.contains("broken"));
            }
            other => panic!("expected CommandFailed, got {:?}", other),
        }
    }

    #[test]
    fn run_command_with_uses_cwd() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("marker.txt"), "x").unwrap();
        let options = CommandOptions {
            cwd: Some(temp.path().to_path_buf()),
            ..Default::default()
        };
        let cmd = if cfg!(target_os = "windows") {
            "dir"
        } else {
            "ls"
        };

        let mut ui = MockLogger::new();
        let result = run_command_with(cmd, &options, false, &mut ui).unwrap();

        assert!(result.stdout.contains("marker.txt"));
    }

    #[test]
    fn combined_output_joins_streams() {
        let result = CommandResult::failure(
            Some(1),
            "out".to_string(),
            "err\n".to_string(),
            Duration::ZERO,
        );
        assert_eq!(result.combined_output(), "out\nerr\n");
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute("echo fast", &CommandOptions::default()).unwrap();
        assert!(result.duration.as_millis() < 5000);
    }
}
