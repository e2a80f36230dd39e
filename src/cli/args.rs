//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Buildprep - build environment checks, command running and option extraction.
#[derive(Debug, Parser)]
#[command(name = "buildprep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides ./.buildprep.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show debug messages and command output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify that required build tools are on PATH
    Verify(VerifyArgs),

    /// Run a shell command, echoing it first
    Run(RunArgs),

    /// Report whether tools are on PATH
    Which(WhichArgs),

    /// Extract prefixed options from an option bag as JSON
    Extract(ExtractArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    /// Scan PATH directories instead of asking the OS lookup command
    #[arg(long)]
    pub scan_path: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Working directory for the command
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Command line to run (joined with spaces)
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl RunArgs {
    /// The command line as a single shell string.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Arguments for the `which` command.
#[derive(Debug, Clone, clap::Args)]
pub struct WhichArgs {
    /// Tools to look up
    #[arg(required = true)]
    pub tools: Vec<String>,

    /// Scan PATH directories instead of asking the OS lookup command
    #[arg(long)]
    pub scan_path: bool,
}

/// Arguments for the `extract` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExtractArgs {
    /// Prefix to extract (a trailing `_` is added if missing)
    #[arg(short, long)]
    pub prefix: String,

    /// JSON or YAML file holding the option bag
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print YAML instead of JSON
    #[arg(long)]
    pub yaml: bool,

    /// Extra options as key=value; `key=` or a bare `key` is an absent value
    pub pairs: Vec<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verify_with_global_flags() {
        let cli = Cli::parse_from(["buildprep", "-v", "verify", "--scan-path"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Verify(args) => assert!(args.scan_path),
            other => panic!("expected Verify, got {:?}", other),
        }
    }

    #[test]
    fn run_collects_hyphenated_arguments() {
        let cli = Cli::parse_from(["buildprep", "run", "ls", "-la", "/tmp"]);
        match cli.command {
            Commands::Run(args) => assert_eq!(args.command_line(), "ls -la /tmp"),
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn run_requires_a_command() {
        assert!(Cli::try_parse_from(["buildprep", "run"]).is_err());
    }

    #[test]
    fn extract_parses_prefix_file_and_pairs() {
        let cli = Cli::parse_from([
            "buildprep",
            "extract",
            "--prefix",
            "android",
            "--file",
            "opts.yml",
            "android_sdk=21",
            "android_ndk=",
        ]);
        match cli.command {
            Commands::Extract(args) => {
                assert_eq!(args.prefix, "android");
                assert_eq!(args.file, Some(PathBuf::from("opts.yml")));
                assert_eq!(args.pairs, vec!["android_sdk=21", "android_ndk="]);
                assert!(!args.yaml);
            }
            other => panic!("expected Extract, got {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["buildprep", "which", "git", "--no-color", "--debug"]);
        assert!(cli.no_color);
        assert!(cli.debug);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["buildprep"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
