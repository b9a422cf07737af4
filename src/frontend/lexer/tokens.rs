//! Token types for the Tiny lexer.
//!
//! The lexer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//!
//! ## Notes
//! - Every token keeps its exact lexeme in `text`. The parser emits identifiers and number
//!   literals verbatim from it, and diagnostics quote it.

use std::fmt;

use crate::frontend::span::Span;
use tinyc_core::lang::keywords::{self, KeywordId};
use tinyc_core::lang::operators::{self, OperatorId};

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Eof,
    Newline,
    Number,
    Ident,
    String,
    Keyword(KeywordId),
    Operator(OperatorId),
}

impl TokenKind {
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }
}

/// Human-readable kind names used in "expected X, got Y" diagnostics.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Newline => write!(f, "NEWLINE"),
            TokenKind::Number => write!(f, "NUMBER"),
            TokenKind::Ident => write!(f, "IDENT"),
            TokenKind::String => write!(f, "STRING"),
            TokenKind::Keyword(id) => write!(f, "{}", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "'{}'", operators::as_str(*id)),
        }
    }
}

/// A token with its kind, exact lexeme, and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The lexeme as it should appear in a diagnostic.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Newline => "newline".to_string(),
            _ => format!("'{}'", self.text),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
