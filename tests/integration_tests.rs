//! Integration tests for the Tiny compiler

use std::fs;
use std::path::Path;

use tinyc::frontend::diagnostics::{self, ErrorKind};
use tinyc::frontend::parser;
use tinyc::{CompileError, compile};

/// Helper to run the full pipeline on a source file
fn compile_file(path: &Path) -> Result<String, CompileError> {
    let source = fs::read_to_string(path).expect("fixture should be readable");
    parser::compile(&source).map(|emitter| emitter.finish())
}

fn tiny_files(dir: &str) -> Vec<std::path::PathBuf> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "tiny"))
        .collect();
    paths.sort();
    paths
}

/// Test that all valid fixtures compile successfully
#[test]
fn test_valid_fixtures() {
    let paths = tiny_files("tests/fixtures/valid");
    assert!(!paths.is_empty());

    for path in paths {
        let result = compile_file(&path);
        assert!(
            result.is_ok(),
            "Expected {} to compile successfully, got error: {:?}",
            path.display(),
            result.unwrap_err()
        );
        let c_code = result.unwrap();
        assert!(c_code.starts_with("#include <stdio.h>\nint main(void){\n"));
        assert!(c_code.ends_with("return 0;\n}\n"));
    }
}

/// Test that invalid fixtures produce errors
#[test]
fn test_invalid_fixtures() {
    let paths = tiny_files("tests/fixtures/invalid");
    assert!(!paths.is_empty());

    for path in paths {
        assert!(compile_file(&path).is_err(), "Expected {} to fail compilation", path.display());
    }
}

#[test]
fn test_invalid_fixture_error_kinds() {
    let cases = [
        ("undeclared_variable", ErrorKind::Semantic),
        ("duplicate_label", ErrorKind::Semantic),
        ("missing_label", ErrorKind::Semantic),
        ("unterminated_while", ErrorKind::Syntax),
        ("missing_comparison", ErrorKind::Syntax),
        ("percent_in_string", ErrorKind::Lexical),
    ];

    for (name, kind) in cases {
        let path = Path::new("tests/fixtures/invalid").join(format!("{name}.tiny"));
        let err = compile_file(&path).unwrap_err();
        assert_eq!(err.kind, kind, "{name}: {}", err.message);
    }
}

#[test]
fn test_error_messages_name_offending_text() {
    let cases = [
        ("PRINT \"a\tb\"\n", "Illegal character in string: '\\t'"),
        ("LET x = 1 ! 2\n", "Expected !=, got ! "),
        ("LET 2x = 1\n", "Identifier cannot start with digits: 2x"),
        ("PRINT 1.\n", "Illegal character in number"),
        ("LET x = 1\nIF x THEN\nENDIF\n", "Expected comparison operator at: 'THEN'"),
        ("PRINT q\n", "Referencing variable before assignment: q"),
        ("WHILE 1 < 2 DO\nENDWHILE\n", "Expected REPEAT, got IDENT 'DO'"),
    ];

    for (source, expected) in cases {
        let err = compile(source).unwrap_err();
        assert!(
            err.message.contains(expected),
            "source {source:?}: expected message containing {expected:?}, got {:?}",
            err.message
        );
    }
}

#[test]
fn test_keywords_are_case_sensitive() {
    // Lower-case `print` is an identifier, so the line is not a statement.
    let err = compile("print 1\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert!(err.message.contains("Invalid statement at 'print'"));
}

#[test]
fn test_first_error_wins() {
    // Both lines are wrong; only the first is reported.
    let err = compile("PRINT a\nGOTO missing\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);
    assert_eq!(err.message, "Referencing variable before assignment: a");
}

#[test]
fn test_compilations_are_independent() {
    compile("LET shared = 1\nLABEL top\n").unwrap();
    // A fresh compilation knows nothing about the previous one.
    let err = compile("PRINT shared\n").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);
    assert!(compile("LABEL top\n").is_ok());
}

#[test]
fn test_crlf_line_endings() {
    let c_code = compile("LET x = 1\r\nPRINT x\r\n").unwrap().finish();
    assert!(c_code.contains("x = 1.0;\nprintf(\"%.2f\\n\", (float)(x));\n"));
}

#[test]
fn test_comments_are_ignored() {
    let source = "# header comment\nLET x = 1 # trailing comment\n# another\nPRINT x\n";
    let c_code = compile(source).unwrap().finish();
    assert!(!c_code.contains("comment"));
    assert!(c_code.contains("x = 1.0;\n"));
}

#[test]
fn test_rendered_diagnostic_mentions_file_and_message() {
    let source = "LET a = 1\nPRINT a +\n";
    let err = compile(source).unwrap_err();
    let rendered = diagnostics::render("sum.tiny", source, &err);
    assert!(rendered.contains("sum.tiny"), "rendered: {rendered}");
    assert!(rendered.contains("Unexpected token at newline"), "rendered: {rendered}");
}
