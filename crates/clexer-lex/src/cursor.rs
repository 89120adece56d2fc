//! Character cursor for traversing the input.
//!
//! The cursor holds a byte position into the input and always moves by
//! whole UTF-8 characters, so every slice it hands out is valid `str`.

/// A forward-only cursor over the input text.
///
/// # Example
///
/// ```
/// use clexer_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("int x");
/// assert_eq!(cursor.current_char(), 'i');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'n');
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The text being scanned.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    ///
    /// A NUL inside the input is indistinguishable from the end marker here;
    /// callers that care use [`Cursor::is_at_end`].
    #[inline]
    pub fn current_char(&self) -> char {
        let Some(&b) = self.source.as_bytes().get(self.position) else {
            return '\0';
        };

        // Fast path for ASCII
        if b < 128 {
            return b as char;
        }

        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Moves past the current character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
        } else if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `predicate` holds for the current character.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the text from `start` up to the cursor.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }
}
