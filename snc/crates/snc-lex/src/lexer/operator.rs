//! Operator lexing.
//!
//! Each function runs after the operator's first character has been
//! consumed and takes at most two more characters (maximal munch).

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Handles: `+`, `++`
    pub(crate) fn lex_plus(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('+') {
            TokenKind::PlusPlus
        } else {
            TokenKind::Plus
        };
        self.make_token(kind)
    }

    /// Handles: `-`, `--`, `->`
    pub(crate) fn lex_minus(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('-') {
            TokenKind::MinusMinus
        } else if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        };
        self.make_token(kind)
    }

    /// Handles: `=`, `==`, `=>`
    pub(crate) fn lex_equals(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::EqualEqual
        } else if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Equal
        };
        self.make_token(kind)
    }

    /// Handles: `!`, `!=`
    pub(crate) fn lex_bang(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::BangEqual
        } else {
            TokenKind::Bang
        };
        self.make_token(kind)
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        };
        self.make_token(kind)
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        };
        self.make_token(kind)
    }

    /// Handles: `&`, `&&`
    pub(crate) fn lex_ampersand(&mut self) -> Token<'a> {
        let kind = if self.cursor.match_char('&') {
            TokenKind::And
        } else {
            TokenKind::Ampersand
        };
        self.make_token(kind)
    }

    /// Handles: `||`. A lone `|` is not an operator.
    pub(crate) fn lex_pipe(&mut self) -> Token<'a> {
        if self.cursor.match_char('|') {
            self.make_token(TokenKind::Or)
        } else {
            self.error_token(LexError::UnexpectedCharacter('|'))
        }
    }

    /// Handles: `.`, `..`, `...`
    pub(crate) fn lex_dot(&mut self) -> Token<'a> {
        if !self.cursor.match_char('.') {
            return self.make_token(TokenKind::Dot);
        }
        let kind = if self.cursor.match_char('.') {
            TokenKind::Spread
        } else {
            TokenKind::Range
        };
        self.make_token(kind)
    }
}
