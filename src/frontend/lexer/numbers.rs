//! Number scanning for the Tiny lexer
//!
//! A number is a maximal run of digits, optionally followed by a decimal point and at least
//! one more digit. The literal text is kept verbatim; the C backend emits it unchanged.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::frontend::diagnostics::{CompileError, CompileResult};
use crate::frontend::span::Span;

impl Lexer {
    pub(super) fn scan_number(&mut self, start: usize) -> CompileResult<Token> {
        self.skip_digits();

        if self.current() == Some('.') {
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return Err(CompileError::lexical(
                    "Illegal character in number: expected a digit after '.'",
                    Span::new(start, self.pos + 1),
                ));
            }
            self.advance(); // consume .
            self.skip_digits();
        }

        // `3abc` is rejected outright instead of lexing as NUMBER IDENT.
        if let Some(c) = self.current().filter(|c| c.is_ascii_alphabetic()) {
            return Err(CompileError::lexical(
                format!("Identifier cannot start with digits: {}{}", self.text_from(start), c),
                Span::new(start, self.pos + 1),
            )
            .with_hint("identifiers must start with a letter"));
        }

        Ok(self.token_from(TokenKind::Number, start))
    }

    fn skip_digits(&mut self) {
        while self.current().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::frontend::diagnostics::ErrorKind;
    use crate::frontend::lexer::{TokenKind, lex};

    #[test]
    fn test_integers_and_decimals() {
        let tokens = lex("42 3.14 0.5 007").unwrap();
        let texts: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Number)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(texts, vec!["42", "3.14", "0.5", "007"]);
    }

    #[test]
    fn test_trailing_point_rejected() {
        let err = lex("LET a = 3.").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert!(err.message.starts_with("Illegal character in number"));
    }

    #[test]
    fn test_point_followed_by_letter_rejected() {
        let err = lex("3.x").unwrap_err();
        assert!(err.message.starts_with("Illegal character in number"));
    }

    #[test]
    fn test_digits_then_letters_rejected() {
        let err = lex("LET 3abc = 1").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
        assert_eq!(err.message, "Identifier cannot start with digits: 3a");
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn test_decimal_then_letters_rejected() {
        let err = lex("1.5e3").unwrap_err();
        assert_eq!(err.message, "Identifier cannot start with digits: 1.5e");
    }

    #[test]
    fn test_number_followed_by_operator() {
        let tokens = lex("2*3").unwrap();
        assert_eq!(tokens[0].text, "2");
        assert_eq!(tokens[1].text, "*");
        assert_eq!(tokens[2].text, "3");
    }

    #[test]
    fn test_second_point_is_unknown_token() {
        let err = lex("1.2.3").unwrap_err();
        assert!(err.message.starts_with("Unknown token"));
    }
}
