//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips spaces, tabs, carriage returns and `//` line comments.
    ///
    /// A newline is never skipped: it ends the line and becomes a NEWLINE
    /// token. A comment stops right before its newline.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.peek() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_next() == '/' => self.skip_line_comment(),
                _ => return,
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.peek() != '\n' {
            self.cursor.advance();
        }
    }
}
