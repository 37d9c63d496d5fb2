//! Diagnostic codes for categorizing compiler errors.
//!
//! # Examples
//!
//! ```
//! use snc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes print as `{prefix}{number:04}`, e.g. `E1001`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal runs to end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Unknown escape sequence
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1003);
    /// E1004: `''`
    pub const E_LEXER_EMPTY_CHAR: Self = Self::new("E", 1004);
    /// E1005: Character literal without closing quote
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 1005);
    /// E1006: Numeric literal text exceeds the staging limit
    pub const E_LEXER_NUMBER_TOO_LONG: Self = Self::new("E", 1006);
    /// E1007: Dedent to a width that matches no enclosing block
    pub const E_LEXER_INCONSISTENT_INDENT: Self = Self::new("E", 1007);
    /// E1008: Integer literal does not fit in 64 bits
    pub const E_LEXER_INTEGER_RANGE: Self = Self::new("E", 1008);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
