/// Token-window helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Predicates on the lookahead window (`check_token`, `check_peek`)
/// - Sliding the window (`next_token`)
/// - Asserting a token kind (`match_token`, `expect_ident`), including the reserved C names
/// - Operator classification via the `tinyc_core` registry
/// - Symbol bookkeeping shared by `LET` and `INPUT`
impl Parser {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is of `kind`.
    fn check_token(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Return `true` if the token after the current one is of `kind`.
    fn check_peek(&self, kind: TokenKind) -> bool {
        self.next.kind == kind
    }

    /// Slide the window by one, pulling a fresh token from the lexer.
    fn next_token(&mut self) -> CompileResult<()> {
        let fresh = self.lexer.next_token()?;
        self.current = mem::replace(&mut self.next, fresh);
        Ok(())
    }

    /// Require the current token to be of `kind`, then advance.
    fn match_token(&mut self, kind: TokenKind) -> CompileResult<()> {
        if !self.check_token(kind) {
            return Err(CompileError::syntax(
                format!("Expected {kind}, got {}", self.found()),
                self.current.span,
            ));
        }
        self.next_token()
    }

    /// Require an identifier and return it.
    ///
    /// Identifiers become C names verbatim, so names C already claims are rejected here.
    fn expect_ident(&mut self) -> CompileResult<Token> {
        let token = self.current.clone();
        self.match_token(TokenKind::Ident)?;
        if c::is_reserved(&token.text) {
            return Err(CompileError::semantic(format!("Name is reserved in C: {}", token.text), token.span)
                .with_hint(format!("rename it, for example `{}1`", token.text)));
        }
        Ok(token)
    }

    /// The current token as it should read after "got".
    fn found(&self) -> String {
        match self.current.kind {
            TokenKind::Ident | TokenKind::Number | TokenKind::String => {
                format!("{} {}", self.current.kind, self.current.describe())
            }
            kind => kind.to_string(),
        }
    }

    /// The current token's operator, if it belongs to `category`.
    fn current_operator(&self, category: OperatorCategory) -> Option<OperatorId> {
        match self.current.kind {
            TokenKind::Operator(id) if operators::category(id) == category => Some(id),
            _ => None,
        }
    }

    /// Record a variable. The first sighting emits its declaration into the header.
    fn declare_variable(&mut self, name: &str) {
        if self.symbols.variables.insert(name.to_string()) {
            tracing::debug!(variable = name, "declared variable");
            self.emitter.header_line(&c::declare_variable(name));
        }
    }
}
