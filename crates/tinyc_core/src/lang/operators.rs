//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the grammatical category each
//! operator belongs to. The parser uses the category to decide which grammar rule may consume
//! an operator (`expression` takes additive operators, `term` multiplicative, `comparison`
//! relational).
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact; the lexer is responsible for maximal munch (`<=` vs `<`).
//! - The C backend spells every operator exactly like the source language does.
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str(">="), Some(OperatorId::GtEq));
//! assert_eq!(operators::category(OperatorId::GtEq), OperatorCategory::Comparison);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Assignment
    Eq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

/// Grammatical category of an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Assignment,
    /// `+` and `-`; also valid as unary signs.
    Additive,
    Multiplicative,
    Comparison,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Eq, "=", OperatorCategory::Assignment),
    op(OperatorId::Plus, "+", OperatorCategory::Additive),
    op(OperatorId::Minus, "-", OperatorCategory::Additive),
    op(OperatorId::Star, "*", OperatorCategory::Multiplicative),
    op(OperatorId::Slash, "/", OperatorCategory::Multiplicative),
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
];

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Spelling of an operator (e.g. `"!="`).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Category of an operator.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Resolve an operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`], `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Operators of a given category, in registry order.
pub fn in_category(category: OperatorCategory) -> impl Iterator<Item = OperatorId> {
    OPERATORS
        .iter()
        .filter(move |o| o.category == category)
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, spelling, category }
}
