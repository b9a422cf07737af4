//! Layering guardrails for the vocabulary crate.
//!
//! `tinyc_core` holds the pure keyword and operator registries. It must stay free of
//! dependencies so the lexer, tests, and any future tooling can share it without pulling in
//! the compiler's stack. This test scans its `Cargo.toml` and fails if `[dependencies]`
//! gains an entry.

#[test]
fn core_vocabulary_crate_has_no_dependencies() {
    let manifest = include_str!("../crates/tinyc_core/Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if !line_no_comment.is_empty() {
            panic!("`tinyc_core` must not have dependencies; found `{line_no_comment}`");
        }
    }
}

#[test]
fn compiler_depends_on_core_vocabulary() {
    let manifest = include_str!("../Cargo.toml");
    assert!(
        manifest.lines().any(|line| line.trim_start().starts_with("tinyc_core")),
        "the compiler should resolve keywords and operators through `tinyc_core`"
    );
}
