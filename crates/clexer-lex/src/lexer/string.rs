//! String literal lexing.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at an opening `"`.
    ///
    /// The lexeme is the raw text between the quotes; backslashes have no
    /// special meaning. Without a closing quote the rest of the input is
    /// consumed and no token is produced.
    pub(super) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance();

        let start = self.cursor.position();
        self.cursor.advance_while(|c| c != '"');

        if self.cursor.is_at_end() {
            return None;
        }

        let content = self.cursor.slice_from(start);
        self.cursor.advance();

        Some(Token::new(content, TokenKind::StringLiteral))
    }
}
