//! Tiny compiler frontend
//!
//! This module contains all frontend components:
//! - `lexer`: tokenization of source code
//! - `parser`: grammar, semantic checks, and C emission in one pass
//! - `diagnostics`: error types and rendering
//! - `span`: byte ranges into the source

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod span;
