//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use snc_util::{Arena, Span};
use tracing::trace;

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::indent::IndentStack;
use crate::token::{Token, TokenKind};

/// Lexer for the Sindarin programming language.
///
/// The lexer is pull-based: every call to [`Lexer::next_token`] returns
/// exactly one token. Block structure is reported through synthetic
/// INDENT/DEDENT tokens, and lexical errors come back as ERROR tokens so the
/// caller decides whether to keep going.
///
/// All literal text is copied into the borrowed [`Arena`] and lives as long
/// as the arena does.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Allocator for string payloads.
    pub(crate) arena: &'a Arena,

    /// File name attached to every token.
    file: &'a str,

    /// Limits in effect.
    pub(crate) config: LexerConfig,

    /// Widths of the open indentation blocks.
    pub(crate) indents: IndentStack,

    /// Set after a NEWLINE until the next line's indentation is resolved.
    pub(crate) at_line_start: bool,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    pub(crate) token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use snc_lex::{Lexer, TokenKind};
    /// use snc_util::Arena;
    ///
    /// let arena = Arena::new();
    /// let mut lexer = Lexer::new("var x = 1", "main.sn", &arena);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Var);
    /// ```
    pub fn new(source: &'a str, file: &'a str, arena: &'a Arena) -> Self {
        Self::with_config(source, file, arena, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(
        source: &'a str,
        file: &'a str,
        arena: &'a Arena,
        config: LexerConfig,
    ) -> Self {
        Self {
            cursor: Cursor::new(source),
            arena,
            file,
            config,
            indents: IndentStack::new(),
            at_line_start: true,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Once the input is exhausted, pending DEDENTs are returned one per
    /// call, followed by EOF on every subsequent call.
    pub fn next_token(&mut self) -> Token<'a> {
        let token = self.scan_token();
        trace!(
            kind = token.kind.name(),
            line = token.line(),
            lexeme = token.lexeme,
            "token"
        );
        token
    }

    fn scan_token(&mut self) -> Token<'a> {
        if self.at_line_start {
            if let Some(token) = self.track_indentation() {
                return token;
            }
        }

        self.skip_whitespace_and_comments();
        self.start_token();

        if self.cursor.is_at_end() {
            return match self.indents.pop() {
                Some(width) => {
                    trace!(width, "closing block at end of input");
                    self.make_token(TokenKind::Dedent)
                },
                None => self.make_token(TokenKind::Eof),
            };
        }

        match self.cursor.advance() {
            '\n' => {
                self.at_line_start = true;
                self.make_token(TokenKind::Newline)
            },
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            '[' => self.make_token(TokenKind::LeftBracket),
            ']' => self.make_token(TokenKind::RightBracket),
            ';' => self.make_token(TokenKind::Semicolon),
            ':' => self.make_token(TokenKind::Colon),
            ',' => self.make_token(TokenKind::Comma),
            '*' => self.make_token(TokenKind::Star),
            '/' => self.make_token(TokenKind::Slash),
            '%' => self.make_token(TokenKind::Modulo),
            '+' => self.lex_plus(),
            '-' => self.lex_minus(),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '.' => self.lex_dot(),
            '"' => self.lex_string(false),
            '\'' => self.lex_char(),
            '$' if self.cursor.peek() == '"' => {
                self.cursor.advance();
                self.lex_string(true)
            },
            '#' => self.lex_pragma(),
            c if super::identifier::is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => self.error_token(LexError::UnexpectedCharacter(c)),
        }
    }

    /// Records the current position as the start of the next token.
    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Builds a token spanning from the recorded start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind<'a>) -> Token<'a> {
        Token {
            kind,
            lexeme: self.cursor.slice_from(self.token_start),
            span: Span::new(
                self.token_start,
                self.cursor.position(),
                self.token_start_line,
                self.token_start_column,
            ),
            file: self.file,
        }
    }

    /// Builds an ERROR token spanning the text consumed so far.
    pub(crate) fn error_token(&self, error: LexError) -> Token<'a> {
        self.make_token(TokenKind::Error(error))
    }

    /// Builds a token at an explicit location without consuming anything.
    pub(crate) fn token_at(&self, kind: TokenKind<'a>, lexeme: &'a str, span: Span) -> Token<'a> {
        Token {
            kind,
            lexeme,
            span,
            file: self.file,
        }
    }

    /// Name of the file being lexed.
    pub fn file(&self) -> &'a str {
        self.file
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Number of open indentation blocks above the base level.
    pub fn indent_depth(&self) -> usize {
        self.indents.depth()
    }

    /// The configuration in effect.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

/// Yields every token before EOF.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
