//! Lexical error taxonomy.
//!
//! Every variant is recoverable: the lexer wraps it in an error token and
//! keeps going on the next call. Running out of memory is not represented
//! here because the arena aborts the process instead.

use snc_util::DiagnosticCode;
use thiserror::Error;

/// A lexical error carried by an error token.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    #[error("Unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// End of input reached inside a string literal
    #[error("Unterminated string starting at line {line}")]
    UnterminatedString {
        /// Line of the opening quote
        line: u32,
    },

    /// Unknown escape sequence in a place where escapes are resolved
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),

    /// `''`
    #[error("Empty character literal")]
    EmptyCharLiteral,

    /// Character literal without its closing quote
    #[error("Unterminated character literal")]
    UnterminatedCharLiteral,

    /// Numeric literal text longer than the configured ceiling
    #[error("Number literal too long")]
    NumberLiteralTooLong {
        /// The ceiling in effect
        max: usize,
    },

    /// Dedent to a width matching no enclosing block
    #[error("Inconsistent indentation")]
    InconsistentIndentation {
        /// Width of the offending line
        found: u32,
        /// Width of the nearest enclosing block below it
        expected: u32,
    },

    /// Integer literal does not fit in a signed 64-bit value
    #[error("Integer literal out of range")]
    IntegerOutOfRange,
}

impl LexError {
    /// Diagnostic code reported for this error
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::InvalidEscape(_) => DiagnosticCode::E_LEXER_INVALID_ESCAPE,
            LexError::EmptyCharLiteral => DiagnosticCode::E_LEXER_EMPTY_CHAR,
            LexError::UnterminatedCharLiteral => DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            LexError::NumberLiteralTooLong { .. } => DiagnosticCode::E_LEXER_NUMBER_TOO_LONG,
            LexError::InconsistentIndentation { .. } => {
                DiagnosticCode::E_LEXER_INCONSISTENT_INDENT
            },
            LexError::IntegerOutOfRange => DiagnosticCode::E_LEXER_INTEGER_RANGE,
        }
    }

    /// Extra context worth attaching to the rendered diagnostic
    pub fn note(&self) -> Option<String> {
        match self {
            LexError::NumberLiteralTooLong { max } => {
                Some(format!("numeric literals are limited to {} characters", max))
            },
            LexError::InconsistentIndentation { found, expected } => Some(format!(
                "line is indented {} but the enclosing block is at {}",
                found, expected
            )),
            LexError::InvalidEscape(_) => {
                Some("valid escapes are \\\\, \\n, \\r, \\t, \\\" and \\'".to_string())
            },
            LexError::IntegerOutOfRange => {
                Some("integer literals must fit in a signed 64-bit value".to_string())
            },
            _ => None,
        }
    }

    /// Suggested fix, when one is obvious
    pub fn help(&self) -> Option<String> {
        match self {
            LexError::UnterminatedString { .. } => Some("add a closing `\"`".to_string()),
            LexError::UnterminatedCharLiteral => Some("add a closing `'`".to_string()),
            LexError::EmptyCharLiteral => {
                Some("write `'\\''` for a quote character".to_string())
            },
            LexError::InconsistentIndentation { expected, .. } => Some(format!(
                "indent the line to width {} to close the inner block",
                expected
            )),
            _ => None,
        }
    }
}
