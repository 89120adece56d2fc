//! clexer-lex - Lexical analyzer for C-like expressions
//!
//! This crate turns a line of C-like source text into an ordered list of
//! classified tokens. It is a pure function of its input: no I/O, no
//! global mutable state, no diagnostics. Every input is accepted.
//!
//! # Example Usage
//!
//! ```
//! use clexer_lex::{tokenize, Token, TokenKind};
//!
//! let tokens = tokenize("int x = 5;");
//! assert_eq!(tokens[0], Token::new("int", TokenKind::Datatype));
//! assert_eq!(tokens[3], Token::new("5", TokenKind::IntLiteral));
//!
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - The scanner
//! - [`cursor`] - Character cursor for input traversal
//! - [`classify`] - Classification tables and predicates
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! **Keywords** (19): `break`, `case`, `continue`, `default`, `do`, `else`,
//! `enum`, `extern`, `for`, `goto`, `if`, `return`, `sizeof`, `static`,
//! `struct`, `switch`, `typedef`, `union`, `while`
//!
//! **Datatypes** (13): `auto`, `char`, `const`, `double`, `float`, `int`,
//! `long`, `register`, `short`, `signed`, `unsigned`, `void`, `volatile`
//!
//! ## Literals and names
//!
//! - **Integer**: ASCII digits only, `42`
//! - **String**: `"..."`, no escapes; the lexeme excludes the quotes
//! - **Identifier**: `[A-Za-z_][A-Za-z0-9_]*`
//!
//! ## Operators
//!
//! `+`, `-`, `*`, `/`, `%`, `>`, `<`, `=` (always single characters)
//!
//! ## Delimiters
//!
//! `,`, `;`, `(`, `)`, `[`, `]`, `{`, `}`
//!
//! ## Unidentified
//!
//! Any other run of characters, e.g. `123abc` or `a.b`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use classify::{
    classify_word, delimiter_kind, is_delimiter, is_integer, is_operator, is_valid_identifier,
    keyword_or_datatype, operator_kind, symbol_kind,
};
pub use cursor::Cursor;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind, UnknownTokenKind};
