//! Diagnostics and error reporting for Tiny
//!
//! Every failure in the pipeline is a [`CompileError`]. The lexer and parser never recover:
//! the first error is returned with `?` all the way up to the caller, which decides how to
//! report it. [`render`] turns an error into a `miette` report with the offending source
//! line highlighted.

use std::fmt;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use super::span::Span;

/// Result type used throughout the frontend.
pub type CompileResult<T> = Result<T, CompileError>;

/// A compile-time error with location information
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub kind: ErrorKind,
    pub message: String,
    pub span: Span,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            hints: Vec::new(),
        }
    }

    /// Illegal character, malformed string or number literal.
    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Lexical, message, span)
    }

    /// Token kind mismatch against the grammar.
    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Syntax, message, span)
    }

    /// Undeclared variable, duplicate label, unresolved goto target.
    pub fn semantic(message: impl Into<String>, span: Span) -> Self {
        Self::new(ErrorKind::Semantic, message, span)
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

/// Error taxonomy of the compilation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Semantic => write!(f, "semantic error"),
        }
    }
}

/// `miette` view of a [`CompileError`] bound to its source text.
#[derive(Debug, Error, Diagnostic)]
#[error("{kind}: {message}")]
struct SourceReport {
    kind: ErrorKind,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

/// Render an error with source context.
///
/// ## Notes
/// - Spans may point one past the end of the source (the synthetic trailing newline or
///   end of input); they are clamped before being handed to `miette`.
pub fn render(file_name: &str, source: &str, error: &CompileError) -> String {
    let start = error.span.start.min(source.len());
    let len = error.span.len().min(source.len() - start);

    let help = if error.hints.is_empty() {
        None
    } else {
        Some(error.hints.join("\n"))
    };

    let report = SourceReport {
        kind: error.kind,
        message: error.message.clone(),
        src: NamedSource::new(file_name, source.to_string()),
        span: SourceSpan::from((start, len)),
        help,
    };

    format!("{:?}", miette::Report::new(report))
}

/// Get line number, column number, and line text for a byte offset
pub fn line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = &source[line_start..line_end];
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind() {
        let err = CompileError::semantic("Label already exists: l", Span::new(0, 1));
        assert_eq!(err.to_string(), "semantic error: Label already exists: l");
    }

    #[test]
    fn test_line_info() {
        let source = "LET a = 1\nPRINT b\n";
        let (line, col, text) = line_info(source, 16);
        assert_eq!(line, 2);
        assert_eq!(col, 7);
        assert_eq!(text, "PRINT b");
    }

    #[test]
    fn test_render_clamps_out_of_range_span() {
        let source = "GOTO a";
        let err = CompileError::syntax("expected NEWLINE", Span::new(6, 7));
        let rendered = render("prog.tiny", source, &err);
        assert!(rendered.contains("expected NEWLINE"), "got: {rendered}");
    }

    #[test]
    fn test_render_empty_source() {
        let err = CompileError::semantic("x", Span::new(3, 4)).with_hint("declare it first");
        let rendered = render("empty.tiny", "", &err);
        assert!(rendered.contains("declare it first"), "got: {rendered}");
    }
}
