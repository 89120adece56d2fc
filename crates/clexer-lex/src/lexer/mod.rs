//! Lexer module.
//!
//! - `core` - Lexer struct, main loop and space skipping
//! - `string` - String literal scanning
//! - `word` - Word runs and single-character symbols

mod core;
mod string;
mod word;

pub use core::{tokenize, Lexer};
