//! Lexer module.
//!
//! The scanner is split by token family:
//! - `core` - Lexer struct and dispatch
//! - `layout` - INDENT/DEDENT tracking
//! - `comment` - whitespace and comment skipping
//! - `identifier` - identifiers, keywords and boolean literals
//! - `number` - numeric literals
//! - `string` - string, interpolated string and char literals
//! - `operator` - operators with one character of lookahead
//! - `pragma` - `#pragma` directives

mod comment;
mod core;
mod identifier;
mod layout;
mod number;
mod operator;
mod pragma;
mod string;

pub use core::Lexer;
