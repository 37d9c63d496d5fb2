//! `#pragma` directive lexing.
//!
//! `#pragma include` and `#pragma link` become dedicated tokens; the
//! directive's argument (usually a string literal) is lexed normally after
//! them. Any other `#pragma` yields a bare PRAGMA token.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

use super::identifier::{is_ident_continue, is_ident_start};

const PRAGMA: &str = "pragma";

impl<'a> Lexer<'a> {
    /// Lexes a directive. The `#` has already been consumed.
    pub(crate) fn lex_pragma(&mut self) -> Token<'a> {
        let rest = self.cursor.remaining();
        let is_pragma = rest.starts_with(PRAGMA)
            && !is_ident_continue(self.cursor.char_at(PRAGMA.len()));
        if !is_pragma {
            return self.error_token(LexError::UnexpectedCharacter('#'));
        }
        for _ in 0..PRAGMA.len() {
            self.cursor.advance();
        }

        let before_word = self.cursor.snapshot();
        while matches!(self.cursor.peek(), ' ' | '\t') {
            self.cursor.advance();
        }

        let word_start = self.cursor.position();
        if is_ident_start(self.cursor.peek()) {
            while is_ident_continue(self.cursor.peek()) {
                self.cursor.advance();
            }
        }

        let kind = match self.cursor.slice_from(word_start) {
            "include" => TokenKind::PragmaInclude,
            "link" => TokenKind::PragmaLink,
            _ => {
                self.cursor.restore(before_word);
                TokenKind::Pragma
            },
        };
        self.make_token(kind)
    }
}
