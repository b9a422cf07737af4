//! Tiny Compiler Backend
//!
//! There is no IR: the parser drives the backend directly as it recognizes each construct.
//!
//! ## Module Organization
//!
//! - `emitter.rs` - Two-buffer text accumulator (header + body), flushed once
//! - `c.rs` - The C fragments each construct translates to

pub mod c;
pub mod emitter;

pub use emitter::Emitter;
