//! Core lexer implementation.
//!
//! This module contains the Lexer struct and its main loop.

use crate::cursor::Cursor;
use crate::token::Token;

/// Lexer for C-like expressions.
///
/// The lexer walks the input once, left to right, and never backtracks.
/// Each call to [`Lexer::next_token`] runs scan steps until one of them
/// produces a token or the input is exhausted.
///
/// # Example
///
/// ```
/// use clexer_lex::{Lexer, Token, TokenKind};
///
/// let mut lexer = Lexer::new("x = 1;");
/// assert_eq!(lexer.next_token(), Some(Token::new("x", TokenKind::Identifier)));
/// assert_eq!(lexer.next_token(), Some(Token::new("=", TokenKind::EqualSign)));
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        while !self.cursor.is_at_end() {
            if let Some(token) = self.step() {
                return Some(token);
            }
        }
        None
    }

    /// Runs one scan step.
    ///
    /// A step consumes at least one character. It yields no token for a
    /// space or for an unterminated string literal.
    fn step(&mut self) -> Option<Token> {
        if self.cursor.current_char() == '"' {
            return self.lex_string();
        }

        let token = match self.lex_word() {
            Some(token) => Some(token),
            None => self.lex_symbol(),
        };

        // Only one space is dropped here; a run of spaces costs one
        // tokenless step per extra space.
        self.cursor.match_char(' ');

        token
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns true once the whole input has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Tokenizes a whole input.
///
/// Never fails: characters that fit no rule end up in `Unidentified`
/// tokens, and an unterminated string literal is dropped.
///
/// # Example
///
/// ```
/// use clexer_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<TokenKind> = tokenize("a+b").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::PlusOp, TokenKind::Identifier]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
