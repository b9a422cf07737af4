#![forbid(unsafe_code)]
//! Tiny Programming Language Compiler
//!
//! Tiny is a small BASIC-like language of floats, labels, and structured loops. This crate
//! compiles it to a single C file in one pass: the frontend (lexer, parser) drives the
//! backend (C emitter) directly, without an intermediate tree.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::Emitter;
pub use frontend::diagnostics::{CompileError, CompileResult, ErrorKind};
pub use frontend::parser::compile;
