/// Compile Tiny source into C.
///
/// This is the main public entrypoint for the frontend: it lexes, parses, checks, and emits
/// in a single pass and returns the filled [`Emitter`]. Nothing is written to disk; call
/// [`Emitter::write_file`] or [`Emitter::finish`] on the result.
///
/// ## Errors
/// Returns the first lexical, syntax, or semantic error encountered.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn compile(source: &str) -> CompileResult<Emitter> {
    let mut parser = Parser::new(source)?;
    parser.program()?;
    tracing::info!("parsing completed");

    let emitter = parser.into_emitter();
    tracing::debug!(
        header_bytes = emitter.header().len(),
        body_bytes = emitter.body().len(),
        "generated C"
    );
    Ok(emitter)
}
