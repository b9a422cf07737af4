#![no_main]

use libfuzzer_sys::fuzz_target;
use tinyc::frontend::{diagnostics, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Every input either compiles or yields an error that renders without panicking.
        match parser::compile(s) {
            Ok(emitter) => {
                let _ = emitter.finish();
            }
            Err(err) => {
                let _ = diagnostics::render("fuzz.tiny", s, &err);
            }
        }
    }
});
