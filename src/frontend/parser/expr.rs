/// Expression parsing methods.
///
/// Each rule consumes operands left to right. An operator is emitted before the parser
/// recurses into its right operand, so the C text comes out in source order without
/// building a tree. Precedence is carried over unchanged: C ranks `*`/`/` over `+`/`-`
/// over relational operators exactly as this grammar does.
impl Parser {
    // ========================================================================
    // Expressions
    // ========================================================================

    /// `comparison ::= expression (relop expression)+`
    fn comparison(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "COMPARISON");
        self.expression()?;

        // At least one comparison operator is required.
        let Some(op) = self.current_operator(OperatorCategory::Comparison) else {
            return Err(CompileError::syntax(
                format!("Expected comparison operator at: {}", self.current.describe()),
                self.current.span,
            )
            .with_hint("conditions compare two expressions with ==, !=, <, <=, > or >="));
        };
        self.binary_operand(op, Self::expression)?;

        while let Some(op) = self.current_operator(OperatorCategory::Comparison) {
            self.binary_operand(op, Self::expression)?;
        }
        Ok(())
    }

    /// `expression ::= term {("-" | "+") term}`
    fn expression(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "EXPRESSION");
        self.term()?;

        while let Some(op) = self.current_operator(OperatorCategory::Additive) {
            self.binary_operand(op, Self::term)?;
        }
        Ok(())
    }

    /// `term ::= unary {("/" | "*") unary}`
    fn term(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "TERM");
        self.unary()?;

        while let Some(op) = self.current_operator(OperatorCategory::Multiplicative) {
            self.binary_operand(op, Self::unary)?;
        }
        Ok(())
    }

    /// `unary ::= ["+" | "-"] primary`
    fn unary(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "UNARY");
        if let Some(op) = self.current_operator(OperatorCategory::Additive) {
            self.emitter.emit(c::unary_operator(op));
            self.next_token()?;
        }
        self.primary()
    }

    /// `primary ::= number | ident`
    fn primary(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "PRIMARY", text = %self.current.text);
        match self.current.kind {
            TokenKind::Number => {
                self.emitter.emit(&c::number_literal(&self.current.text));
                return self.next_token();
            }
            TokenKind::Ident => {
                if !self.symbols.variables.contains(&self.current.text) {
                    return Err(CompileError::semantic(
                        format!("Referencing variable before assignment: {}", self.current.text),
                        self.current.span,
                    )
                    .with_hint("assign it with LET or INPUT first"));
                }
            }
            _ => {
                return Err(CompileError::syntax(
                    format!("Unexpected token at {}", self.current.describe()),
                    self.current.span,
                ));
            }
        }

        self.emitter.emit(&self.current.text);
        self.next_token()
    }

    /// Emit `op`, consume it, and parse the right operand with `operand`.
    fn binary_operand(
        &mut self,
        op: OperatorId,
        operand: fn(&mut Self) -> CompileResult<()>,
    ) -> CompileResult<()> {
        self.emitter.emit(&c::binary_operator(op));
        self.next_token()?;
        operand(self)
    }
}
