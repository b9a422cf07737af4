/// Statement parsing methods.
///
/// This chunk parses the seven statement forms and the newline terminator. Each method
/// consumes its statement up to (not including) the terminating newline and emits the C
/// translation as it goes; `statement()` then requires the newline.
impl Parser {
    // ========================================================================
    // Statements
    // ========================================================================

    fn statement(&mut self) -> CompileResult<()> {
        match self.current.kind {
            TokenKind::Keyword(KeywordId::Print) => self.print_stmt()?,
            TokenKind::Keyword(KeywordId::If) => self.if_stmt()?,
            TokenKind::Keyword(KeywordId::While) => self.while_stmt()?,
            TokenKind::Keyword(KeywordId::Label) => self.label_stmt()?,
            TokenKind::Keyword(KeywordId::Goto) => self.goto_stmt()?,
            TokenKind::Keyword(KeywordId::Let) => self.let_stmt()?,
            TokenKind::Keyword(KeywordId::Input) => self.input_stmt()?,
            kind => {
                let mut err = CompileError::syntax(
                    format!("Invalid statement at {} ({kind})", self.current.describe()),
                    self.current.span,
                );
                if kind == TokenKind::Ident && self.check_peek(TokenKind::Operator(OperatorId::Eq)) {
                    err = err.with_hint(format!("assignments start with LET: `LET {} = ...`", self.current.text));
                }
                return Err(err);
            }
        }

        // Every statement ends with a newline.
        self.nl()
    }

    /// `nl ::= '\n'+`
    fn nl(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "NEWLINE");
        self.match_token(TokenKind::Newline)?;
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }
        Ok(())
    }

    /// `"PRINT" (expression | string)`
    fn print_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-PRINT");
        self.next_token()?;

        if self.check_token(TokenKind::String) {
            let line = c::print_string(&self.current.text);
            self.emitter.emit_line(&line);
            self.next_token()
        } else {
            self.emitter.emit(c::PRINT_NUMBER_OPEN);
            self.expression()?;
            self.emitter.emit_line(c::PRINT_NUMBER_CLOSE);
            Ok(())
        }
    }

    /// `"IF" comparison "THEN" nl {statement} "ENDIF"`
    fn if_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-IF");
        self.next_token()?;
        self.emitter.emit(c::IF_OPEN);
        self.comparison()?;

        self.match_token(TokenKind::Keyword(KeywordId::Then))?;
        self.nl()?;
        self.emitter.emit_line(c::CONDITION_CLOSE);

        self.block(KeywordId::EndIf)
    }

    /// `"WHILE" comparison "REPEAT" nl {statement} "ENDWHILE"`
    fn while_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-WHILE");
        self.next_token()?;
        self.emitter.emit(c::WHILE_OPEN);
        self.comparison()?;

        self.match_token(TokenKind::Keyword(KeywordId::Repeat))?;
        self.nl()?;
        self.emitter.emit_line(c::CONDITION_CLOSE);

        self.block(KeywordId::EndWhile)
    }

    /// `{statement} closer`, shared by `IF` and `WHILE`.
    fn block(&mut self, closer: KeywordId) -> CompileResult<()> {
        if self.depth >= MAX_BLOCK_DEPTH {
            return Err(CompileError::syntax(
                format!("Blocks nested too deeply (limit {MAX_BLOCK_DEPTH})"),
                self.current.span,
            ));
        }
        self.depth += 1;
        let result = self.block_body(closer);
        self.depth -= 1;
        result
    }

    fn block_body(&mut self, closer: KeywordId) -> CompileResult<()> {
        let closer_kind = TokenKind::Keyword(closer);
        while !self.check_token(closer_kind) {
            if self.check_token(TokenKind::Eof) {
                return Err(CompileError::syntax(
                    format!("Expected {closer_kind}, got {}", self.found()),
                    self.current.span,
                ));
            }
            self.statement()?;
        }

        self.match_token(closer_kind)?;
        self.emitter.emit_line(c::BLOCK_CLOSE);
        Ok(())
    }

    /// `"LABEL" ident`
    fn label_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-LABEL");
        self.next_token()?;
        let label = self.expect_ident()?;

        if !self.symbols.labels_declared.insert(label.text.clone()) {
            return Err(CompileError::semantic(
                format!("Label already exists: {}", label.text),
                label.span,
            ));
        }
        tracing::debug!(label = %label.text, "declared label");

        self.emitter.emit_line(&c::label(&label.text));
        Ok(())
    }

    /// `"GOTO" ident`. The target is resolved after the whole program is read.
    fn goto_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-GOTO");
        self.next_token()?;
        let label = self.expect_ident()?;

        tracing::debug!(label = %label.text, "goto reference");
        self.emitter.emit_line(&c::goto(&label.text));
        self.symbols.labels_gotoed.entry(label.text).or_insert(label.span);
        Ok(())
    }

    /// `"LET" ident "=" expression`
    ///
    /// The variable is declared before the expression is parsed, so `LET a = a + 1` is
    /// accepted on a's first assignment.
    fn let_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-LET");
        self.next_token()?;
        let name = self.expect_ident()?;
        self.declare_variable(&name.text);

        self.emitter.emit(&c::assign_prefix(&name.text));
        self.match_token(TokenKind::Operator(OperatorId::Eq))?;
        self.expression()?;
        self.emitter.emit_line(c::STATEMENT_END);
        Ok(())
    }

    /// `"INPUT" ident`
    fn input_stmt(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "STATEMENT-INPUT");
        self.next_token()?;
        let name = self.expect_ident()?;
        self.declare_variable(&name.text);

        for line in c::read_number(&name.text) {
            self.emitter.emit_line(&line);
        }
        Ok(())
    }
}
