//! Number literal lexing.
//!
//! Accepted forms:
//!
//! - Int: `42`
//! - Long: `42l`
//! - Double: `3.14`, `3.14d`
//!
//! A `.` only starts a fraction when a digit follows it, so `1..5` is
//! `1`, `..`, `5`. The `d` suffix is only taken after a fraction: `3d` is
//! `3` followed by the identifier `d`.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal. The first digit has already been consumed.
    pub(crate) fn lex_number(&mut self) -> Token<'a> {
        self.skip_digits();

        let mut is_double = false;
        if self.cursor.peek() == '.' && self.cursor.peek_next().is_ascii_digit() {
            is_double = true;
            self.cursor.advance();
            self.skip_digits();
        }

        let text = self.cursor.slice_from(self.token_start);
        let suffix = self.cursor.peek();
        let is_long = match suffix {
            'd' if is_double => {
                self.cursor.advance();
                false
            },
            'l' if !is_double => {
                self.cursor.advance();
                true
            },
            _ => false,
        };

        if text.len() > self.config.max_number_len {
            return self.error_token(LexError::NumberLiteralTooLong {
                max: self.config.max_number_len,
            });
        }

        if is_double {
            // Digits with at most one interior '.' always parse.
            let value = text.parse::<f64>().unwrap_or_default();
            return self.make_token(TokenKind::DoubleLiteral(value));
        }

        match text.parse::<i64>() {
            Ok(value) if is_long => self.make_token(TokenKind::LongLiteral(value)),
            Ok(value) => self.make_token(TokenKind::IntLiteral(value)),
            Err(_) => self.error_token(LexError::IntegerOutOfRange),
        }
    }

    fn skip_digits(&mut self) {
        while self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
        }
    }
}
