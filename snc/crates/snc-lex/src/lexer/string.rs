//! String and character literal lexing.
//!
//! Interpolated strings keep every `{...}` span verbatim in the payload;
//! substituting the expressions is left to later stages. While inside a
//! span, a nested string literal may itself contain `}` or `"` without
//! closing anything, so the scanner keeps a small stack of open frames.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;
use snc_util::ArenaString;

/// Starting size of the payload buffer.
const INITIAL_CAPACITY: usize = 32;

/// A context opened inside the literal being scanned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Frame {
    /// `{ ... }`
    Brace,
    /// A string literal nested in a brace span.
    Str { interpolated: bool },
}

impl<'a> Lexer<'a> {
    /// Lexes a string literal. The opening quote (and `$` for an
    /// interpolated string) has already been consumed.
    ///
    /// Escapes are resolved only outside of `{...}` spans. An invalid escape
    /// does not stop the scan: the literal is read up to its closing quote
    /// and the first bad escape is reported for the whole token.
    pub(crate) fn lex_string(&mut self, interpolated: bool) -> Token<'a> {
        let arena = self.arena;
        let mut content = arena.string_with_capacity(INITIAL_CAPACITY);
        let mut frames: Vec<Frame> = Vec::new();
        let mut invalid_escape = None;

        loop {
            if self.cursor.is_at_end() {
                return self.error_token(LexError::UnterminatedString {
                    line: self.token_start_line,
                });
            }

            let c = self.cursor.advance();
            match frames.last().copied() {
                None => match c {
                    '"' => break,
                    '\\' => {
                        if self.cursor.is_at_end() {
                            continue;
                        }
                        let escaped = self.cursor.advance();
                        match string_escape(escaped) {
                            Some(resolved) => content.push(resolved),
                            None => {
                                invalid_escape.get_or_insert(LexError::InvalidEscape(escaped));
                            },
                        }
                    },
                    '{' => {
                        frames.push(Frame::Brace);
                        content.push(c);
                    },
                    _ => content.push(c),
                },
                Some(Frame::Brace) => {
                    content.push(c);
                    match c {
                        '{' => frames.push(Frame::Brace),
                        '}' => {
                            frames.pop();
                        },
                        '"' => frames.push(Frame::Str { interpolated: false }),
                        '$' if self.cursor.peek() == '"' => {
                            content.push(self.cursor.advance());
                            frames.push(Frame::Str { interpolated: true });
                        },
                        '\\' => self.copy_escaped(&mut content),
                        _ => {},
                    }
                },
                Some(Frame::Str { interpolated: nested }) => {
                    content.push(c);
                    match c {
                        '"' => {
                            frames.pop();
                        },
                        '\\' => self.copy_escaped(&mut content),
                        '{' if nested => frames.push(Frame::Brace),
                        _ => {},
                    }
                },
            }
        }

        if let Some(error) = invalid_escape {
            return self.error_token(error);
        }

        let payload = content.into_bump_str();
        let kind = if interpolated {
            TokenKind::InterpolString(payload)
        } else {
            TokenKind::StringLiteral(payload)
        };
        self.make_token(kind)
    }

    /// Copies the character after a backslash without interpreting it.
    fn copy_escaped(&mut self, content: &mut ArenaString<'a>) {
        if !self.cursor.is_at_end() {
            content.push(self.cursor.advance());
        }
    }

    /// Lexes a character literal. The opening quote has already been
    /// consumed.
    ///
    /// Nothing past a newline is consumed, so an unterminated literal never
    /// swallows the NEWLINE token.
    pub(crate) fn lex_char(&mut self) -> Token<'a> {
        if self.cursor.is_at_end() || self.cursor.peek() == '\n' {
            return self.error_token(LexError::UnterminatedCharLiteral);
        }

        let value = match self.cursor.advance() {
            '\'' => return self.error_token(LexError::EmptyCharLiteral),
            '\\' => {
                if self.cursor.is_at_end() || self.cursor.peek() == '\n' {
                    return self.error_token(LexError::UnterminatedCharLiteral);
                }
                let escaped = self.cursor.advance();
                match char_escape(escaped) {
                    Some(value) => value,
                    None => {
                        self.cursor.match_char('\'');
                        return self.error_token(LexError::InvalidEscape(escaped));
                    },
                }
            },
            c => c,
        };

        if !self.cursor.match_char('\'') {
            return self.error_token(LexError::UnterminatedCharLiteral);
        }
        self.make_token(TokenKind::CharLiteral(value))
    }
}

fn string_escape(c: char) -> Option<char> {
    match c {
        '\\' => Some('\\'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '"' => Some('"'),
        _ => None,
    }
}

fn char_escape(c: char) -> Option<char> {
    match c {
        '\'' => Some('\''),
        _ => string_escape(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snc_util::Arena;

    fn check(source: &str, f: impl FnOnce(&mut Lexer<'_>)) {
        let arena = Arena::new();
        let mut lexer = Lexer::new(source, "t.sn", &arena);
        f(&mut lexer);
    }

    #[test]
    fn test_plain_string_resolves_escapes() {
        check(r#""a\tb\n\\ \"q\"""#, |lexer| {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::StringLiteral("a\tb\n\\ \"q\""));
            assert_eq!(token.lexeme, r#""a\tb\n\\ \"q\"""#);
        });
    }

    #[test]
    fn test_empty_string() {
        check(r#""""#, |lexer| {
            assert_eq!(lexer.next_token().kind, TokenKind::StringLiteral(""));
            assert!(lexer.next_token().is_eof());
        });
    }

    #[test]
    fn test_interpolation_kept_verbatim() {
        check(r#"$"Hello {name}!""#, |lexer| {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::InterpolString("Hello {name}!"));
            assert_eq!(token.lexeme, r#"$"Hello {name}!""#);
        });
    }

    #[test]
    fn test_escape_inside_braces_is_not_resolved() {
        check(r#"$"{x}\n{f("a\n")}""#, |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::InterpolString("{x}\n{f(\"a\\n\")}")
            );
        });
    }

    #[test]
    fn test_sibling_spans_containing_strings() {
        check(r#"$"{a("}")} and {b("{")}" x"#, |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::InterpolString(r#"{a("}")} and {b("{")}"#)
            );
            assert_eq!(lexer.next_token().lexeme, "x");
        });
    }

    #[test]
    fn test_nested_interpolated_string() {
        check(r#"$"outer {$"inner {v}"} done""#, |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::InterpolString(r#"outer {$"inner {v}"} done"#)
            );
            assert!(lexer.next_token().is_eof());
        });
    }

    #[test]
    fn test_escaped_quote_in_nested_string() {
        check(r#"$"{f("a\"b")}""#, |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::InterpolString(r#"{f("a\"b")}"#)
            );
        });
    }

    #[test]
    fn test_stray_close_brace_is_literal() {
        check(r#""a}b""#, |lexer| {
            assert_eq!(lexer.next_token().kind, TokenKind::StringLiteral("a}b"));
        });
    }

    #[test]
    fn test_multiline_string_tracks_lines() {
        check("\"a\nb\" c", |lexer| {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::StringLiteral("a\nb"));
            assert_eq!(token.line(), 1);
            let next = lexer.next_token();
            assert_eq!(next.lexeme, "c");
            assert_eq!(next.line(), 2);
        });
    }

    #[test]
    fn test_unterminated_reports_start_line() {
        check("x\n\"abc\ndef", |lexer| {
            lexer.next_token();
            lexer.next_token();
            let token = lexer.next_token();
            assert_eq!(
                token.kind,
                TokenKind::Error(LexError::UnterminatedString { line: 2 })
            );
            assert_eq!(token.line(), 2);
            assert_eq!(token.lexeme, "\"abc\ndef");
            assert!(lexer.next_token().is_eof());
        });
    }

    #[test]
    fn test_unclosed_span_is_unterminated() {
        check(r#"$"{x""#, |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::Error(LexError::UnterminatedString { line: 1 })
            );
        });
    }

    #[test]
    fn test_invalid_escape_consumes_whole_literal() {
        check(r#""a\qb\zc" d"#, |lexer| {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Error(LexError::InvalidEscape('q')));
            assert_eq!(token.lexeme, r#""a\qb\zc""#);
            assert_eq!(lexer.next_token().lexeme, "d");
        });
    }

    #[test]
    fn test_char_literals() {
        check(r"'a' '\n' '\'' '\\'", |lexer| {
            assert_eq!(lexer.next_token().kind, TokenKind::CharLiteral('a'));
            assert_eq!(lexer.next_token().kind, TokenKind::CharLiteral('\n'));
            assert_eq!(lexer.next_token().kind, TokenKind::CharLiteral('\''));
            assert_eq!(lexer.next_token().kind, TokenKind::CharLiteral('\\'));
        });
    }

    #[test]
    fn test_char_accepts_escaped_double_quote() {
        check(r#"'\"' '"'"#, |lexer| {
            let escaped = lexer.next_token();
            assert_eq!(escaped.kind, TokenKind::CharLiteral('"'));
            assert_eq!(escaped.lexeme, r#"'\"'"#);
            assert_eq!(lexer.next_token().kind, TokenKind::CharLiteral('"'));
        });
    }

    #[test]
    fn test_char_errors() {
        check("'' 'ab' '\\q'", |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::Error(LexError::EmptyCharLiteral)
            );
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::Error(LexError::UnterminatedCharLiteral)
            );
        });
        check("'\\q' x", |lexer| {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Error(LexError::InvalidEscape('q')));
            assert_eq!(token.lexeme, "'\\q'");
            assert_eq!(lexer.next_token().lexeme, "x");
        });
    }

    #[test]
    fn test_unterminated_char_keeps_newline() {
        check("'\nx", |lexer| {
            assert_eq!(
                lexer.next_token().kind,
                TokenKind::Error(LexError::UnterminatedCharLiteral)
            );
            assert_eq!(lexer.next_token().kind, TokenKind::Newline);
        });
    }
}
