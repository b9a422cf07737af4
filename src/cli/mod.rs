//! CLI module for the Tiny compiler
//!
//! This module provides the command-line interface for the compiler.
//!
//! ## Usage
//!
//! - `tinyc <FILE>` - Compile to C and write `out.c`
//! - `tinyc <FILE> -o <PATH>` - Compile to C and write PATH
//! - `tinyc <FILE> --emit-c` - Print the generated C instead of writing it
//! - `tinyc <FILE> --lex` - Print the token stream (debug)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;

use crate::version::TINYC_VERSION;

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
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
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
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Bad invocation.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// The source could not be read or the output could not be written.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }

    /// Create a failure error (exit code 1). Used for rendered compile diagnostics.
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

/// Where the C output goes when `-o` is not given.
pub const DEFAULT_OUTPUT: &str = "out.c";

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Tiny to C compiler
#[derive(Parser, Debug)]
#[command(name = "tinyc")]
#[command(version = TINYC_VERSION)]
#[command(about = "Compile a Tiny program to C", long_about = None)]
pub struct Cli {
    /// Tiny source file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output path for the generated C
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the generated C to stdout instead of writing a file
    #[arg(long = "emit-c", conflicts_with = "output")]
    pub emit_c: bool,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex", conflicts_with_all = ["output", "emit_c"])]
    pub lex: bool,

    /// Trace every grammar rule as it is entered
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Parse the process arguments.
///
/// `--help` and `--version` exit 0; any other parse failure is a usage error and exits 1.
pub fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => err.exit(),
            _ => {
                let e = CliError::usage(err.render().to_string());
                eprintln!("{}", e.message.trim_end());
                process::exit(e.exit_code.0);
            }
        },
    }
}

impl Cli {
    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose { "trace" } else { "info" }
    }
}

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run(cli: Cli) {
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
    // Handle debug flags first
    if cli.lex {
        return commands::lex_file(&cli.file);
    }
    if cli.emit_c {
        return commands::emit_c(&cli.file);
    }

    let output = cli.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    commands::compile_file(&cli.file, &output)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_file() {
        let cli = Cli::try_parse_from(["tinyc", "prog.tiny"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("prog.tiny"));
        assert!(cli.output.is_none());
        assert!(!cli.emit_c && !cli.lex && !cli.verbose);
    }

    #[test]
    fn test_cli_parse_output() {
        let cli = Cli::try_parse_from(["tinyc", "prog.tiny", "-o", "build/prog.c"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("build/prog.c")));

        let cli = Cli::try_parse_from(["tinyc", "--output", "x.c", "prog.tiny"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("x.c")));
    }

    #[test]
    fn test_cli_parse_debug_flags() {
        let cli = Cli::try_parse_from(["tinyc", "--lex", "prog.tiny"]).unwrap();
        assert!(cli.lex);

        let cli = Cli::try_parse_from(["tinyc", "--emit-c", "-v", "prog.tiny"]).unwrap();
        assert!(cli.emit_c);
        assert!(cli.verbose);
    }

    #[test]
    fn test_verbose_comes_from_parsed_flags() {
        let cli = Cli::try_parse_from(["tinyc", "prog.tiny", "--verbose"]).unwrap();
        assert_eq!(cli.default_log_filter(), "trace");

        // After `--`, `-v` is the file name, not the flag.
        let cli = Cli::try_parse_from(["tinyc", "--", "-v"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("-v"));
        assert!(!cli.verbose);
        assert_eq!(cli.default_log_filter(), "info");
    }

    #[test]
    fn test_cli_requires_exactly_one_file() {
        let err = Cli::try_parse_from(["tinyc"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::MissingRequiredArgument);

        assert!(Cli::try_parse_from(["tinyc", "a.tiny", "b.tiny"]).is_err());
    }

    #[test]
    fn test_cli_rejects_conflicting_outputs() {
        let err = Cli::try_parse_from(["tinyc", "a.tiny", "--emit-c", "-o", "x.c"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from(["tinyc", "a.tiny", "--lex", "--emit-c"]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::ArgumentConflict);
    }
}
