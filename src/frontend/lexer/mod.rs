//! Lexer for the Tiny language
//!
//! Handles tokenization including:
//! - Keywords (`PRINT`, `LET`, `IF`, `WHILE`, ...) and identifiers
//! - Number and string literals
//! - Operators (`+ - * / = == != < <= > >=`)
//! - Newlines, which terminate statements and are therefore real tokens
//! - `#` line comments
//!
//! Tokens are produced lazily, one per [`Lexer::next_token`] call. The parser pulls them on
//! demand; nothing ever materializes the whole stream except [`lex`].
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String literal scanning
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

use std::iter::FusedIterator;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::frontend::diagnostics::{CompileError, CompileResult};
use crate::frontend::span::Span;
use tinyc_core::lang::operators;

/// Lexer for Tiny source code.
///
/// Owns the source text with one synthetic `\n` appended, so the final line always ends in a
/// `Newline` token even when the file does not. Reading past the end yields `None` as the
/// current character forever; [`Lexer::next_token`] keeps returning `Eof` from then on.
pub struct Lexer {
    source: String,
    /// Byte offset of `current`.
    pos: usize,
    current: Option<char>,
    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl Lexer {
    /// Create a new lexer for the given source code.
    pub fn new(source: &str) -> Self {
        let mut text = String::with_capacity(source.len() + 1);
        text.push_str(source);
        text.push('\n');
        let current = text.chars().next();

        Self {
            source: text,
            pos: 0,
            current,
            finished: false,
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    /// The character under the cursor, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Consume the current character and load the next one.
    pub fn advance(&mut self) {
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
            self.current = self.source[self.pos..].chars().next();
        }
    }

    /// The character after the current one, without consuming anything.
    pub fn peek(&self) -> Option<char> {
        let c = self.current?;
        self.source[self.pos + c.len_utf8()..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current, Some(' ' | '\t' | '\r')) {
            self.advance();
        }
    }

    fn skip_comment(&mut self) {
        if self.current == Some('#') {
            while !matches!(self.current, Some('\n') | None) {
                self.advance();
            }
        }
    }

    fn text_from(&self, start: usize) -> &str {
        &self.source[start..self.pos]
    }

    fn token_from(&self, kind: TokenKind, start: usize) -> Token {
        Token::new(kind, self.text_from(start), Span::new(start, self.pos))
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    /// Return the next token.
    ///
    /// ## Errors
    /// Any illegal character or malformed literal is a lexical error. There is no recovery;
    /// callers are expected to stop at the first error.
    pub fn next_token(&mut self) -> CompileResult<Token> {
        self.skip_whitespace();
        self.skip_comment();

        let start = self.pos;
        let Some(c) = self.current else {
            return Ok(Token::new(TokenKind::Eof, "", Span::new(start, start)));
        };

        match c {
            '+' | '-' | '*' | '/' | '=' | '>' | '<' | '!' => self.scan_operator(c, start),
            '"' => self.scan_string(start),
            '\n' => {
                self.advance();
                Ok(self.token_from(TokenKind::Newline, start))
            }
            c if c.is_ascii_digit() => self.scan_number(start),
            c if is_ident_start(c) => Ok(self.scan_identifier(start)),
            c => Err(CompileError::lexical(
                format!("Unknown token: {}", c.escape_default()),
                Span::new(start, start + c.len_utf8()),
            )),
        }
    }

    /// Maximal munch over the operator registry: a two-character spelling wins over its
    /// one-character prefix.
    fn scan_operator(&mut self, c: char, start: usize) -> CompileResult<Token> {
        if let Some(next) = self.peek() {
            let pair: String = [c, next].iter().collect();
            if let Some(id) = operators::from_str(&pair) {
                self.advance();
                self.advance();
                return Ok(self.token_from(TokenKind::Operator(id), start));
            }
        }

        let Some(id) = operators::from_str(c.encode_utf8(&mut [0; 4])) else {
            // Only `!` has no spelling of its own.
            let got = self.peek().map(|c| c.escape_default().to_string()).unwrap_or_default();
            return Err(CompileError::lexical(
                format!("Expected !=, got {c}{got}"),
                Span::new(start, start + c.len_utf8()),
            ));
        };
        self.advance();
        Ok(self.token_from(TokenKind::Operator(id), start))
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        while self.current.is_some_and(is_ident_continue) {
            self.advance();
        }

        let kind = match keyword_id(self.text_from(start)) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident,
        };
        self.token_from(kind, start)
    }
}

impl Iterator for Lexer {
    type Item = CompileResult<Token>;

    /// Yields every token up to and including `Eof`, or up to the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        if !matches!(&result, Ok(token) if token.kind != TokenKind::Eof) {
            self.finished = true;
        }
        Some(result)
    }
}

impl FusedIterator for Lexer {}

/// Check if a character can start an identifier (ASCII letters only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Convenience function to lex a whole source string.
///
/// The returned vector always ends with exactly one `Eof` token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> CompileResult<Vec<Token>> {
    Lexer::new(source).collect()
}

// ============================================================================
// TESTS
// ============================================================================
