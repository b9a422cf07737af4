/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its semantic bookkeeping, and the top-level
/// `program()` rule.
///
/// ## Notes
/// - This file is `include!`'d into `crate::frontend::parser`.
///
/// Names the parser has seen so far in one compilation.
///
/// All three sets only grow. Variables and labels live in separate, flat namespaces: a label
/// declared inside an `IF` or `WHILE` block is visible to every `GOTO` in the program.
#[derive(Debug, Default)]
struct Symbols {
    /// Variables assigned by `LET` or `INPUT`.
    variables: HashSet<String>,
    /// Labels declared by `LABEL`.
    labels_declared: HashSet<String>,
    /// Labels targeted by `GOTO`, with the span of the first reference. Sorted so the
    /// unresolved-label check always reports the same label first.
    labels_gotoed: BTreeMap<String, Span>,
}

/// How many `IF`/`WHILE` blocks may be open at once. Each level costs a few stack frames.
const MAX_BLOCK_DEPTH: usize = 256;

/// Parser state.
///
/// ## Notes
/// - The lookahead window is exactly two tokens, `current` and `next`; the lexer is pulled
///   one token at a time and never rewound.
/// - The parser is single-pass and stops at the first error.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    next: Token,
    symbols: Symbols,
    emitter: Emitter,
    /// Open `IF`/`WHILE` blocks.
    depth: usize,
}

impl Parser {
    /// Create a parser over `source` and fill the lookahead window.
    ///
    /// ## Errors
    /// Fails if either of the first two tokens is a lexical error.
    pub fn new(source: &str) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let next = lexer.next_token()?;

        Ok(Self {
            lexer,
            current,
            next,
            symbols: Symbols::default(),
            emitter: Emitter::new(),
            depth: 0,
        })
    }

    /// `program ::= {statement}`
    ///
    /// Wraps the statements in the C entry point and, once everything has been read,
    /// checks that every `GOTO` target was declared somewhere.
    pub fn program(&mut self) -> CompileResult<()> {
        tracing::trace!(rule = "PROGRAM");
        self.emitter.header_line(c::INCLUDES);
        self.emitter.header_line(c::MAIN_OPEN);

        // Some newlines are required by the grammar; leading ones are just noise.
        while self.check_token(TokenKind::Newline) {
            self.next_token()?;
        }

        while !self.check_token(TokenKind::Eof) {
            self.statement()?;
        }

        self.emitter.emit_line(c::MAIN_RETURN);
        self.emitter.emit_line(c::BLOCK_CLOSE);

        self.check_labels()
    }

    /// Every label referenced by a `GOTO` must be declared.
    fn check_labels(&self) -> CompileResult<()> {
        for (label, span) in &self.symbols.labels_gotoed {
            if !self.symbols.labels_declared.contains(label) {
                return Err(CompileError::semantic(
                    format!("Attempting to GOTO to undeclared label: {label}"),
                    *span,
                )
                .with_hint(format!("add `LABEL {label}` somewhere in the program")));
            }
        }
        Ok(())
    }

    /// Hand over the generated code.
    pub fn into_emitter(self) -> Emitter {
        self.emitter
    }
}
