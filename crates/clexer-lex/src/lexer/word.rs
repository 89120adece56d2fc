//! Word run and symbol lexing.
//!
//! A word run is the longest stretch of characters that are neither
//! delimiters, operators nor spaces. Digits and letters never separate
//! anything, so `123abc` is a single run.

use crate::classify::{classify_word, is_delimiter, is_operator, symbol_kind};
use crate::token::Token;
use crate::Lexer;

/// Returns true for characters that may appear inside a word run.
fn is_word_char(c: char) -> bool {
    c != ' ' && !is_delimiter(c) && !is_operator(c)
}

impl<'a> Lexer<'a> {
    /// Lexes a word run and classifies it.
    ///
    /// Returns `None` without moving when the run is empty.
    pub(super) fn lex_word(&mut self) -> Option<Token> {
        let start = self.cursor.position();
        self.cursor.advance_while(is_word_char);

        if start == self.cursor.position() {
            return None;
        }

        let word = self.cursor.slice_from(start);
        Some(Token::new(word, classify_word(word)))
    }

    /// Lexes the single character under the cursor as a symbol.
    ///
    /// Always consumes one character. A space yields no token.
    pub(super) fn lex_symbol(&mut self) -> Option<Token> {
        let c = self.cursor.current_char();
        self.cursor.advance();
        symbol_kind(c).map(|kind| Token::new(c.to_string(), kind))
    }
}
