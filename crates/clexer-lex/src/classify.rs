//! Classification tables and predicates.
//!
//! The tables are immutable static data. Every predicate here is a pure
//! lookup so the lexer can call them freely while scanning.

use crate::token::TokenKind;

/// Single-character delimiters.
pub static DELIMITERS: [(char, TokenKind); 8] = [
    (',', TokenKind::Comma),
    (';', TokenKind::Semicolon),
    ('(', TokenKind::OpenParenthesis),
    (')', TokenKind::CloseParenthesis),
    ('[', TokenKind::OpenBracket),
    (']', TokenKind::CloseBracket),
    ('{', TokenKind::OpenBrace),
    ('}', TokenKind::CloseBrace),
];

/// Single-character operators.
pub static OPERATORS: [(char, TokenKind); 8] = [
    ('+', TokenKind::PlusOp),
    ('-', TokenKind::MinusOp),
    ('*', TokenKind::MultiplyOp),
    ('/', TokenKind::DivideOp),
    ('>', TokenKind::GreaterThan),
    ('<', TokenKind::LessThan),
    ('=', TokenKind::EqualSign),
    ('%', TokenKind::ModulusOp),
];

/// Reserved control words.
pub static KEYWORDS: [&str; 19] = [
    "break", "case", "continue", "default", "do", "else", "enum", "extern", "for", "goto", "if",
    "return", "sizeof", "static", "struct", "switch", "typedef", "union", "while",
];

/// Type names and qualifiers.
pub static DATATYPES: [&str; 13] = [
    "auto", "char", "const", "double", "float", "int", "long", "register", "short", "signed",
    "unsigned", "void", "volatile",
];

fn lookup(table: &[(char, TokenKind)], c: char) -> Option<TokenKind> {
    table
        .iter()
        .find_map(|&(symbol, kind)| (symbol == c).then_some(kind))
}

/// Returns the kind of a delimiter character.
///
/// # Example
///
/// ```
/// use clexer_lex::{delimiter_kind, TokenKind};
///
/// assert_eq!(delimiter_kind(';'), Some(TokenKind::Semicolon));
/// assert_eq!(delimiter_kind('+'), None);
/// ```
pub fn delimiter_kind(c: char) -> Option<TokenKind> {
    lookup(&DELIMITERS, c)
}

/// Returns the kind of an operator character.
pub fn operator_kind(c: char) -> Option<TokenKind> {
    lookup(&OPERATORS, c)
}

/// Checks if a character is one of `, ; ( ) [ ] { }`.
pub fn is_delimiter(c: char) -> bool {
    delimiter_kind(c).is_some()
}

/// Checks if a character is one of `+ - * / % > < =`.
pub fn is_operator(c: char) -> bool {
    operator_kind(c).is_some()
}

/// Returns the kind of a single symbol character, delimiters first.
pub fn symbol_kind(c: char) -> Option<TokenKind> {
    delimiter_kind(c).or_else(|| operator_kind(c))
}

/// Returns `Keyword` or `Datatype` for reserved words, `None` otherwise.
///
/// Matching is exact and case-sensitive: `Int` is not a datatype.
pub fn keyword_or_datatype(word: &str) -> Option<TokenKind> {
    if KEYWORDS.contains(&word) {
        Some(TokenKind::Keyword)
    } else if DATATYPES.contains(&word) {
        Some(TokenKind::Datatype)
    } else {
        None
    }
}

/// Checks that `word` is non-empty and made only of ASCII digits.
pub fn is_integer(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Checks that `word` matches `[A-Za-z_][A-Za-z0-9_]*`.
///
/// # Example
///
/// ```
/// use clexer_lex::is_valid_identifier;
///
/// assert!(is_valid_identifier("_tmp1"));
/// assert!(!is_valid_identifier("1tmp"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// Classifies a word run.
///
/// The order is fixed: reserved words, then integers, then identifiers.
/// Whatever is left is `Unidentified`.
pub fn classify_word(word: &str) -> TokenKind {
    if let Some(kind) = keyword_or_datatype(word) {
        kind
    } else if is_integer(word) {
        TokenKind::IntLiteral
    } else if is_valid_identifier(word) {
        TokenKind::Identifier
    } else {
        TokenKind::Unidentified
    }
}
