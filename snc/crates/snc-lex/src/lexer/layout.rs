//! Indentation tracking at the start of each logical line.

use snc_util::Span;
use tracing::debug;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Resolves the indentation of the line the cursor is at.
    ///
    /// Runs only while `at_line_start` is set. Returns a structural token
    /// (INDENT, DEDENT or an inconsistent-indentation ERROR), or `None` when
    /// the call should fall through to ordinary scanning.
    ///
    /// The cursor is never moved here: the leading whitespace is left for
    /// the whitespace skipper, so a DEDENT that keeps the flag set sees the
    /// same line again on the next call.
    pub(crate) fn track_indentation(&mut self) -> Option<Token<'a>> {
        let mut width = 0u32;
        let mut offset = 0usize;
        loop {
            let step = match self.cursor.char_at(offset) {
                ' ' => 1,
                '\t' => self.config.tab_width,
                _ => break,
            };
            width = width.saturating_add(step);
            offset += 1;
        }

        let rest = &self.cursor.remaining()[offset..];
        if is_blank_or_comment(rest) {
            return None;
        }

        let top = self.indents.top();
        if width == top {
            self.at_line_start = false;
            return None;
        }

        if width > top {
            self.indents.push(width);
            self.at_line_start = false;
            debug!(line = self.cursor.line(), width, "indent");
            return Some(self.layout_token(TokenKind::Indent, offset));
        }

        let below = self.indents.below_top().unwrap_or(0);
        if below < width {
            // Dedent lands between two open blocks. The stack is kept so
            // the line continues the innermost block.
            self.at_line_start = false;
            let error = LexError::InconsistentIndentation {
                found: width,
                expected: below,
            };
            return Some(self.layout_token(TokenKind::Error(error), offset));
        }

        self.indents.pop();
        if below == width {
            self.at_line_start = false;
        }
        debug!(line = self.cursor.line(), width, remaining = self.indents.depth(), "dedent");
        Some(self.layout_token(TokenKind::Dedent, offset))
    }

    /// Zero-width token placed after the line's leading whitespace.
    fn layout_token(&self, kind: TokenKind<'a>, indent_len: usize) -> Token<'a> {
        let start = self.cursor.position() + indent_len;
        let column = self.cursor.column() + indent_len as u32;
        let lexeme = match kind {
            TokenKind::Error(_) => &self.cursor.remaining()[..indent_len],
            _ => "",
        };
        let span = match kind {
            TokenKind::Error(_) => Span::new(
                self.cursor.position(),
                start,
                self.cursor.line(),
                self.cursor.column(),
            ),
            _ => Span::point(start, self.cursor.line(), column),
        };
        self.token_at(kind, lexeme, span)
    }
}

/// Whether the rest of a line after its indentation contributes nothing to
/// block structure.
fn is_blank_or_comment(rest: &str) -> bool {
    let rest = rest.trim_start_matches('\r');
    rest.is_empty() || rest.starts_with('\n') || rest.starts_with("//")
}
