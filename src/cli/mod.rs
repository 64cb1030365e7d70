//! CLI module for the shhell generator
//!
//! ## Commands
//!
//! - `generate [DIR]` - Scan the search path and regenerate the stub package
//! - `list` - Scan the search path and report what would be declared
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros. Command functions return
//! `CliResult<T>` instead of calling `process::exit`; only the top-level `run()`
//! function handles errors and exits. Running `shhell` with no subcommand generates
//! into the default package directory.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::SHHELL_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point catches these
/// errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self { message: message.into(), exit_code }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Autocompletion for your whole PATH
#[derive(Parser, Debug)]
#[command(name = "shhell")]
#[command(version = SHHELL_VERSION)]
#[command(about = "Generate Python autocompletion stubs for every executable on your PATH", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the search path and regenerate the stub package
    Generate {
        /// Output package directory
        #[arg(value_name = "DIR", default_value = "shhell")]
        output_dir: PathBuf,
        /// Explicit search path (platform separator), instead of $PATH
        #[arg(long = "path", value_name = "PATH")]
        search_path: Option<String>,
    },

    /// Scan the search path and report what would be declared
    List {
        /// Explicit search path (platform separator), instead of $PATH
        #[arg(long = "path", value_name = "PATH")]
        search_path: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command implementations
/// return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Bare `shhell` behaves like `shhell generate` with defaults.
    let command = cli.command.unwrap_or(Command::Generate {
        output_dir: PathBuf::from("shhell"),
        search_path: None,
    });

    match command {
        Command::Generate { output_dir, search_path } => {
            commands::generate(&output_dir, search_path.as_deref())
        }
        Command::List { search_path } => commands::list(search_path.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["shhell", "generate", "out/shhell"]).unwrap();
        if let Some(Command::Generate { output_dir, search_path }) = cli.command {
            assert_eq!(output_dir, PathBuf::from("out/shhell"));
            assert!(search_path.is_none());
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["shhell", "generate"]).unwrap();
        if let Some(Command::Generate { output_dir, .. }) = cli.command {
            assert_eq!(output_dir, PathBuf::from("shhell"));
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parse_list_with_path_override() {
        let cli = Cli::try_parse_from(["shhell", "list", "--path", "/usr/bin"]).unwrap();
        if let Some(Command::List { search_path }) = cli.command {
            assert_eq!(search_path.as_deref(), Some("/usr/bin"));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["shhell"]).unwrap();
        assert!(cli.command.is_none());
    }
}
