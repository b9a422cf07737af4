//! Tiny language vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `OperatorId`) and look up spellings and
//! metadata via the registry tables.
//!
//! ## Notes
//! - Registries are **pure**: no token types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("WHILE"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "WHILE");
//! ```

pub mod keywords;
pub mod operators;
