//! snc-lex - Lexical Analyzer for the Sindarin Programming Language
//!
//! This crate turns Sindarin source text into a stream of tokens for the
//! parser. Sindarin uses significant indentation, so besides ordinary
//! tokens the lexer synthesizes INDENT and DEDENT tokens from each line's
//! leading whitespace.
//!
//! # Example Usage
//!
//! ```
//! use snc_lex::{Lexer, TokenKind};
//! use snc_util::Arena;
//!
//! let arena = Arena::new();
//! let source = "if ready:\n    go()\n";
//!
//! // Iterate through tokens (EOF is not yielded)
//! let kinds: Vec<_> = Lexer::new(source, "main.sn", &arena)
//!     .map(|t| t.kind.name())
//!     .collect();
//! assert_eq!(kinds[..3], ["IF", "IDENTIFIER", "COLON"]);
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source, "main.sn", &arena);
//! assert_eq!(lexer.next_token().kind, TokenKind::If);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the keyword classifier
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`indent`] - Stack of open indentation blocks
//! - [`error`] - Lexical errors carried by ERROR tokens
//! - [`config`] - Tunable limits
//!
//! # Token Categories
//!
//! ## Layout
//!
//! `NEWLINE` ends every physical line. `INDENT` opens a block when a line
//! is indented deeper than the current one, and one `DEDENT` is produced
//! per block closed. Blank and comment-only lines never affect blocks.
//!
//! ## Keywords
//!
//! `fn var val return if else for while break continue in import nil int
//! int32 uint uint32 long double float char str bool byte void shared
//! private as ref native type opaque`
//!
//! ## Literals
//!
//! - **Integer**: `42`, long `42l`
//! - **Double**: `3.14`, `3.14d`
//! - **String**: `"hello\n"`, interpolated `$"hi {name}"`
//! - **Char**: `'a'`, `'\n'`
//! - **Boolean**: `true`, `false`
//!
//! ## Operators
//!
//! `+ ++ - -- -> * / % = == => ! != < <= > >= && || & . .. ...`
//!
//! ## Errors
//!
//! Lexical errors never stop the lexer. They come back as tokens of kind
//! [`TokenKind::Error`] and scanning resumes on the next call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod indent;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;
#[cfg(test)]
mod property_tests;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::LexError;
pub use indent::IndentStack;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Literal, Token, TokenKind, RESERVED_WORDS};

use snc_util::Arena;

/// Lexes a whole source, returning every token including the final EOF.
///
/// # Examples
///
/// ```
/// use snc_lex::{tokenize, TokenKind};
/// use snc_util::Arena;
///
/// let arena = Arena::new();
/// let tokens = tokenize("x = 1", "main.sn", &arena);
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2].kind, TokenKind::IntLiteral(1));
/// assert!(tokens[3].is_eof());
/// ```
pub fn tokenize<'a>(source: &'a str, file: &'a str, arena: &'a Arena) -> Vec<Token<'a>> {
    tokenize_with_config(source, file, arena, LexerConfig::default())
}

/// Like [`tokenize`], with explicit limits.
pub fn tokenize_with_config<'a>(
    source: &'a str,
    file: &'a str,
    arena: &'a Arena,
    config: LexerConfig,
) -> Vec<Token<'a>> {
    let mut lexer = Lexer::with_config(source, file, arena, config);
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            return tokens;
        }
    }
}
