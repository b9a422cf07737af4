//! Provide the canonical language vocabulary for the Tiny compiler.
//!
//! This crate is intentionally small and dependency-free. It holds the reserved keywords and
//! operators of the language as registries keyed by stable IDs, so the lexer, parser, and
//! diagnostics never compare raw strings.
//!
//! ## Notes
//!
//! - No IO, no global mutable state, and no compiler-specific types.

pub mod lang;
