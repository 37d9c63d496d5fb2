//! Identifier and keyword lexing.

use crate::token::{keyword_from_ident, Token, TokenKind};
use crate::Lexer;

/// Whether `c` may begin an identifier.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether `c` may continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword or boolean literal.
    ///
    /// The first character has already been consumed. Reads the longest run
    /// of identifier characters, then lets the classifier decide whether the
    /// text is reserved.
    pub(crate) fn lex_identifier(&mut self) -> Token<'a> {
        while is_ident_continue(self.cursor.peek()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        self.make_token(keyword_from_ident(text).unwrap_or(TokenKind::Identifier))
    }
}
