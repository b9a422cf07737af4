//! Code emitter - accumulates generated C source text
//!
//! The emitter keeps two independent, append-only buffers:
//! - `header`: includes, the `main` prologue, and variable declarations
//! - `body`: statement translations in source order
//!
//! Nothing touches the filesystem until [`Emitter::write_file`], which concatenates header
//! and body and writes them in one go. A compilation that fails half way therefore never
//! leaves a partial output file behind.

use std::fs;
use std::io;
use std::path::Path;

/// A buffer for building C source code
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Emitter {
    header: String,
    body: String,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment to the body without a line terminator.
    pub fn emit(&mut self, code: &str) {
        self.body.push_str(code);
    }

    /// Append a fragment plus newline to the body.
    pub fn emit_line(&mut self, code: &str) {
        self.body.push_str(code);
        self.body.push('\n');
    }

    /// Append a line to the header.
    pub fn header_line(&mut self, code: &str) {
        self.header.push_str(code);
        self.header.push('\n');
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get the generated code: header followed by body.
    pub fn finish(self) -> String {
        let mut out = self.header;
        out.push_str(&self.body);
        out
    }

    /// Persist the generated code. This is the only write the compiler performs.
    pub fn write_file(self, path: &Path) -> io::Result<()> {
        let len = self.header.len() + self.body.len();
        fs::write(path, self.finish())?;
        tracing::debug!(path = %path.display(), bytes = len, "wrote output");
        Ok(())
    }
}
