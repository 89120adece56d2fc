//! Token type definitions.
//!
//! A [`Token`] pairs the exact matched text with a [`TokenKind`]. The kinds
//! form a closed set and each has a stable snake_case name used by every
//! consumer of the token stream (listings, reports, JSON output).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a lexeme.
///
/// Symbol kinds (operators and delimiters) carry no payload: the matched
/// character is always available as the token's lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Reserved control word (`if`, `while`, `return`, ...).
    Keyword,
    /// Type name or type qualifier (`int`, `const`, `unsigned`, ...).
    Datatype,
    /// Text between a pair of double quotes.
    StringLiteral,
    /// Run of ASCII decimal digits.
    IntLiteral,
    /// `[A-Za-z_][A-Za-z0-9_]*` that is not reserved.
    Identifier,
    /// Anything the other rules reject.
    Unidentified,

    // Operators
    /// `+`
    PlusOp,
    /// `-`
    MinusOp,
    /// `*`
    MultiplyOp,
    /// `/`
    DivideOp,
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `=`
    EqualSign,
    /// `%`
    ModulusOp,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `(`
    OpenParenthesis,
    /// `)`
    CloseParenthesis,
    /// `[`
    OpenBracket,
    /// `]`
    CloseBracket,
    /// `{`
    OpenBrace,
    /// `}`
    CloseBrace,
}

impl TokenKind {
    /// Every kind, in the order of the published name table.
    pub const ALL: [TokenKind; 22] = [
        TokenKind::Keyword,
        TokenKind::Datatype,
        TokenKind::StringLiteral,
        TokenKind::IntLiteral,
        TokenKind::Identifier,
        TokenKind::Unidentified,
        TokenKind::PlusOp,
        TokenKind::MinusOp,
        TokenKind::MultiplyOp,
        TokenKind::DivideOp,
        TokenKind::GreaterThan,
        TokenKind::LessThan,
        TokenKind::EqualSign,
        TokenKind::ModulusOp,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::OpenParenthesis,
        TokenKind::CloseParenthesis,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
        TokenKind::OpenBrace,
        TokenKind::CloseBrace,
    ];

    /// Returns the stable interop name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use clexer_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::OpenParenthesis.as_str(), "open_parenthesis");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Datatype => "datatype",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::IntLiteral => "int_literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Unidentified => "unidentified",
            TokenKind::PlusOp => "plus_op",
            TokenKind::MinusOp => "minus_op",
            TokenKind::MultiplyOp => "multiply_op",
            TokenKind::DivideOp => "divide_op",
            TokenKind::GreaterThan => "greater_than",
            TokenKind::LessThan => "less_than",
            TokenKind::EqualSign => "equal_sign",
            TokenKind::ModulusOp => "modulus_op",
            TokenKind::Comma => "comma",
            TokenKind::Semicolon => "semicolon",
            TokenKind::OpenParenthesis => "open_parenthesis",
            TokenKind::CloseParenthesis => "close_parenthesis",
            TokenKind::OpenBracket => "open_bracket",
            TokenKind::CloseBracket => "close_bracket",
            TokenKind::OpenBrace => "open_brace",
            TokenKind::CloseBrace => "close_brace",
        }
    }

    /// Returns true for the single-character operator and delimiter kinds.
    pub const fn is_symbol(self) -> bool {
        !matches!(
            self,
            TokenKind::Keyword
                | TokenKind::Datatype
                | TokenKind::StringLiteral
                | TokenKind::IntLiteral
                | TokenKind::Identifier
                | TokenKind::Unidentified
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a name that is not in the kind table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown token kind: {0}")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Exact source text. For string literals, the text between the quotes.
    pub lexeme: String,
    /// Classification of `lexeme`.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a token from a lexeme and its kind.
    pub fn new(lexeme: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lexeme: {}, Token: {}", self.lexeme, self.kind)
    }
}
