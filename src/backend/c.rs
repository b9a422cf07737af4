//! C fragments for each Tiny construct.
//!
//! Every piece of text the compiler writes comes from here, so the translation contract
//! lives in one place:
//!
//! | Tiny                | C                                                    |
//! |---------------------|------------------------------------------------------|
//! | program             | `#include <stdio.h>` / `int main(void){` ... `return 0;` `}` |
//! | `PRINT "s"`         | `printf("s\n");`                                     |
//! | `PRINT expr`        | `printf("%.2f\n", (float)(expr));`                   |
//! | `IF c THEN`         | `if(c){` ... `}`                                     |
//! | `WHILE c REPEAT`    | `while(c){` ... `}`                                  |
//! | `LABEL l`           | `l:;`                                                |
//! | `GOTO l`            | `goto l;`                                            |
//! | `LET v = e`         | `float v;` (header, once) and `v = e;`               |
//! | `INPUT v`           | `float v;` (header, once) and a guarded `scanf`      |

use tinyc_core::lang::operators::{self, OperatorId};

pub const INCLUDES: &str = "#include <stdio.h>";
pub const MAIN_OPEN: &str = "int main(void){";
pub const MAIN_RETURN: &str = "return 0;";

pub const IF_OPEN: &str = "if(";
pub const WHILE_OPEN: &str = "while(";
/// Closes a condition and opens the block.
pub const CONDITION_CLOSE: &str = "){";
pub const BLOCK_CLOSE: &str = "}";

pub const PRINT_NUMBER_OPEN: &str = "printf(\"%.2f\\n\", (float)(";
pub const PRINT_NUMBER_CLOSE: &str = "));";
pub const STATEMENT_END: &str = ";";

/// `printf` of a literal string. The lexer has already rejected `%`, `\`, and control
/// characters, so the text is safe to splice into the format string.
pub fn print_string(text: &str) -> String {
    format!("printf(\"{text}\\n\");")
}

pub fn declare_variable(name: &str) -> String {
    format!("float {name};")
}

pub fn assign_prefix(name: &str) -> String {
    format!("{name} = ")
}

/// A label needs a statement after it in C; `;` supplies an empty one.
pub fn label(name: &str) -> String {
    format!("{name}:;")
}

pub fn goto(name: &str) -> String {
    format!("goto {name};")
}

/// Read a number into `name`. On a failed read the variable is zeroed and the offending
/// word is discarded so the next read starts fresh.
pub fn read_number(name: &str) -> [String; 4] {
    [
        format!("if(0 == scanf(\"%f\", &{name})) {{"),
        format!("{name} = 0;"),
        "scanf(\"%*s\");".to_string(),
        BLOCK_CLOSE.to_string(),
    ]
}

/// Binary and relational operators are padded so `a - -b` never becomes C's `--`.
pub fn binary_operator(id: OperatorId) -> String {
    format!(" {} ", operators::as_str(id))
}

pub fn unary_operator(id: OperatorId) -> &'static str {
    operators::as_str(id)
}

/// Every Tiny number is a float, so a literal always reaches C with a decimal point. That
/// also keeps `010` decimal and `09` legal.
pub fn number_literal(text: &str) -> String {
    if text.contains('.') {
        text.to_string()
    } else {
        format!("{text}.0")
    }
}

/// Names a Tiny identifier cannot take because the generated file already gives them a
/// meaning: C keywords, the `<stdio.h>` names the output relies on or that are macros, and
/// `main`. Tiny identifiers are ASCII alphanumeric, so underscore-prefixed names never occur.
pub const RESERVED_NAMES: &[&str] = &[
    // C keywords
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else", "enum",
    "extern", "float", "for", "goto", "if", "inline", "int", "long", "register", "restrict",
    "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union",
    "unsigned", "void", "volatile", "while",
    // <stdio.h>
    "printf", "scanf", "EOF", "NULL", "FILE", "stdin", "stdout", "stderr", "BUFSIZ",
    // entry point
    "main",
];

/// Whether `name` would collide with C or the generated prologue.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}
