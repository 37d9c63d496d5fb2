//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for error reporting.
//!
//! Every other part of the lexer reads the source through this type only.

/// A cursor for traversing source code character by character.
///
/// The cursor never reads past the end of the buffer: lookahead beyond the
/// end yields `'\0'`, and advancing at the end is a no-op.
///
/// # Example
///
/// ```
/// use snc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
///
/// assert_eq!(cursor.peek(), 'v');
/// assert_eq!(cursor.advance(), 'v');
/// assert_eq!(cursor.peek(), 'a');
/// assert_eq!(cursor.peek_next(), 'r');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

/// Saved cursor state for backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    position: usize,
    line: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use snc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.peek(), '\0');
    /// ```
    #[inline]
    pub fn peek(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character after the current one, or `'\0'`.
    #[inline]
    pub fn peek_next(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.char_at(self.peek().len_utf8())
    }

    /// Returns the character at the given byte offset from current position.
    ///
    /// Offsets are in bytes; callers use it to look across runs of ASCII
    /// (indentation, keywords) where bytes and characters coincide.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Consumes the current character and returns it.
    ///
    /// A consumed `'\n'` increments the line counter exactly once and resets
    /// the column. At the end of the source nothing moves and `'\0'` is
    /// returned.
    ///
    /// # Example
    ///
    /// ```
    /// use snc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// assert_eq!(cursor.advance(), '\n');
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    pub fn advance(&mut self) -> char {
        if self.is_at_end() {
            return '\0';
        }

        let c = self.peek();
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// Consumes the current character only if it equals `expected`.
    #[inline]
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Whether every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text not yet consumed.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Captures the current position for a later [`Cursor::restore`].
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewinds to a previously captured position.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}
