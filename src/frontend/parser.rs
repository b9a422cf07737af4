//! Parser for the Tiny language
//!
//! A recursive-descent parser that validates the grammar, performs the semantic checks, and
//! emits C in the same single pass. There is no AST: each rule writes its translation to the
//! [`Emitter`] as soon as it recognizes a construct.
//!
//! ```text
//! program    ::= {statement}
//! statement  ::= "PRINT" (expression | string) nl
//!              | "IF" comparison "THEN" nl {statement} "ENDIF" nl
//!              | "WHILE" comparison "REPEAT" nl {statement} "ENDWHILE" nl
//!              | "LABEL" ident nl
//!              | "GOTO" ident nl
//!              | "LET" ident "=" expression nl
//!              | "INPUT" ident nl
//! comparison ::= expression (("==" | "!=" | ">" | ">=" | "<" | "<=") expression)+
//! expression ::= term {("-" | "+") term}
//! term       ::= unary {("/" | "*") unary}
//! unary      ::= ["+" | "-"] primary
//! primary    ::= number | ident
//! nl         ::= '\n'+
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use tinyc::frontend::parser;
//!
//! let c_code = parser::compile("LET x = 5\nPRINT x\n").unwrap().finish();
//! assert!(c_code.contains("float x;"));
//! ```

use std::collections::{BTreeMap, HashSet};
use std::mem;

use crate::backend::{Emitter, c};
use crate::frontend::diagnostics::{CompileError, CompileResult};
use crate::frontend::lexer::{Lexer, Token, TokenKind};
use crate::frontend::span::Span;
use tinyc_core::lang::keywords::KeywordId;
use tinyc_core::lang::operators::{self, OperatorCategory, OperatorId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
