//! String scanning for the Tiny lexer
//!
//! A string runs from `"` to the next `"` with no escapes. The contents end up inside a C
//! `printf` format string, so characters that would break or inject into it are rejected:
//! carriage return, newline, tab, backslash, and `%`.

use super::Lexer;
use super::tokens::{Token, TokenKind};
use crate::frontend::diagnostics::{CompileError, CompileResult};
use crate::frontend::span::Span;

/// Characters that may not appear between the quotes.
const FORBIDDEN_IN_STRING: &[char] = &['\r', '\n', '\t', '\\', '%'];

impl Lexer {
    /// Scan a string literal. The token text excludes the quotes.
    pub(super) fn scan_string(&mut self, start: usize) -> CompileResult<Token> {
        self.advance(); // opening quote
        let content_start = self.pos;

        loop {
            match self.current() {
                Some('"') => break,
                Some(c) if FORBIDDEN_IN_STRING.contains(&c) => {
                    return Err(CompileError::lexical(
                        format!("Illegal character in string: '{}'", c.escape_default()),
                        Span::new(self.pos, self.pos + c.len_utf8()),
                    )
                    .with_hint("strings cannot contain newlines, tabs, backslashes, or '%'"));
                }
                Some(_) => self.advance(),
                None => {
                    return Err(CompileError::lexical(
                        "Unterminated string",
                        Span::new(start, self.pos),
                    ));
                }
            }
        }

        let text = self.text_from(content_start).to_string();
        self.advance(); // closing quote
        Ok(Token::new(TokenKind::String, text, Span::new(start, self.pos)))
    }
}

#[cfg(test)]
mod tests {
    use crate::frontend::diagnostics::ErrorKind;
    use crate::frontend::lexer::{TokenKind, lex};

    #[test]
    fn test_string_text_excludes_quotes() {
        let tokens = lex(r#"PRINT "hello, world!""#).unwrap();
        assert_eq!(tokens[1].kind, TokenKind::String);
        assert_eq!(tokens[1].text, "hello, world!");
        assert_eq!(tokens[1].span.len(), 15);
    }

    #[test]
    fn test_empty_string() {
        let tokens = lex(r#""""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "");
    }

    #[test]
    fn test_keywords_inside_strings_are_text() {
        let tokens = lex(r#""LET x = 1 # not a comment""#).unwrap();
        assert_eq!(tokens[0].text, "LET x = 1 # not a comment");
        assert_eq!(tokens[1].kind, TokenKind::Newline);
    }

    #[test]
    fn test_forbidden_characters() {
        for source in ["\"a\tb\"", "\"100%\"", "\"back\\slash\"", "\"cr\rlf\""] {
            let err = lex(source).unwrap_err();
            assert_eq!(err.kind, ErrorKind::Lexical, "{source:?}");
            assert!(err.message.starts_with("Illegal character in string"), "{source:?}");
        }
    }

    #[test]
    fn test_unterminated_string_hits_newline() {
        let err = lex("PRINT \"oops").unwrap_err();
        assert_eq!(err.message, "Illegal character in string: '\\n'");
    }
}
