//! Define the reserved keyword vocabulary for the Tiny language.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) recording the canonical spelling
//! and the grammatical role of each keyword.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `PRINT` is a keyword, `print` is an identifier.
//! - This registry is intentionally **pure** (no tokens/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use tinyc_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("ENDIF"), Some(KeywordId::EndIf));
//! assert_eq!(keywords::category(KeywordId::EndIf), KeywordCategory::BlockCloser);
//! assert_eq!(keywords::from_str("endif"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    EndIf,
    While,
    Repeat,
    EndWhile,
}

/// Grammatical role of a keyword.
///
/// ## Notes
/// - Categories are metadata only; the parser owns the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Starts a statement (`PRINT`, `LET`, `IF`, ...).
    Statement,
    /// Separates a condition from its block (`THEN`, `REPEAT`).
    BlockOpener,
    /// Terminates a block (`ENDIF`, `ENDWHILE`).
    BlockCloser,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful; statements come first, block syntax after.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Label, "LABEL", KeywordCategory::Statement),
    info(KeywordId::Goto, "GOTO", KeywordCategory::Statement),
    info(KeywordId::Print, "PRINT", KeywordCategory::Statement),
    info(KeywordId::Input, "INPUT", KeywordCategory::Statement),
    info(KeywordId::Let, "LET", KeywordCategory::Statement),
    info(KeywordId::If, "IF", KeywordCategory::Statement),
    info(KeywordId::While, "WHILE", KeywordCategory::Statement),
    info(KeywordId::Then, "THEN", KeywordCategory::BlockOpener),
    info(KeywordId::Repeat, "REPEAT", KeywordCategory::BlockOpener),
    info(KeywordId::EndIf, "ENDIF", KeywordCategory::BlockCloser),
    info(KeywordId::EndWhile, "ENDWHILE", KeywordCategory::BlockCloser),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling (e.g. `"ENDWHILE"`).
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by exact spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is a reserved word, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
