//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use crate::backend::Emitter;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions
/// during compilation.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let metadata = fs::metadata(path)
        .map_err(|e| CliError::io(format!("Cannot access file '{}': {}", path.display(), e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::io(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::io(format!("Error reading file '{}': {}", path.display(), e)))
}

/// Turn a compile error into a rendered CLI failure.
fn report(path: &Path, source: &str, err: &CompileError) -> CliError {
    let (line, col, _) = diagnostics::line_info(source, err.span.start);
    tracing::debug!(kind = %err.kind, line, col, "compilation failed");
    CliError::failure(diagnostics::render(&path.display().to_string(), source, err).trim_end())
}

/// Read and compile a file, keeping everything in memory.
fn compile_source(path: &Path) -> CliResult<Emitter> {
    let source = read_source(path)?;
    tracing::info!(path = %path.display(), "compiling");
    parser::compile(&source).map_err(|err| report(path, &source, &err))
}

/// Compile a file and write the C output.
///
/// The output file is only created once the whole program has compiled.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn compile_file(path: &Path, output: &Path) -> CliResult<ExitCode> {
    let emitter = compile_source(path)?;

    emitter
        .write_file(output)
        .map_err(|e| CliError::io(format!("Error writing output '{}': {}", output.display(), e)))?;
    tracing::info!(output = %output.display(), "compilation complete");
    Ok(ExitCode::SUCCESS)
}

/// Compile a file and print the C to stdout.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn emit_c(path: &Path) -> CliResult<ExitCode> {
    let emitter = compile_source(path)?;
    print!("{}", emitter.finish());
    Ok(ExitCode::SUCCESS)
}

/// Tokenize a file and print one token per line.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let source = read_source(path)?;
    let tokens = lexer::lex(&source).map_err(|err| report(path, &source, &err))?;

    for tok in &tokens {
        println!("{}\t{}", tok.kind, tok.text.escape_default());
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("definitely/not/here.tiny")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Cannot access file"), "got: {}", err.message);
    }

    #[test]
    fn test_report_renders_message() {
        let source = "PRINT y\n";
        let err = parser::compile(source).unwrap_err();
        let cli_err = report(Path::new("prog.tiny"), source, &err);
        assert_eq!(cli_err.exit_code, ExitCode::FAILURE);
        assert!(cli_err.message.contains("Referencing variable before assignment: y"));
    }
}
