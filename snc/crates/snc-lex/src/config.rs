//! Lexer configuration.

/// Longest numeric literal text accepted by default (digits, `.` and
/// fraction; the suffix letter is not counted).
pub const DEFAULT_MAX_NUMBER_LEN: usize = 255;

/// Columns a tab contributes to leading indentation by default.
pub const DEFAULT_TAB_WIDTH: u32 = 1;

/// Tunable limits of a [`Lexer`](crate::Lexer).
///
/// # Examples
///
/// ```
/// use snc_lex::LexerConfig;
///
/// let config = LexerConfig {
///     max_number_len: 32,
///     ..LexerConfig::default()
/// };
/// assert_eq!(config.tab_width, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Numeric literals with longer text produce `NumberLiteralTooLong`.
    pub max_number_len: usize,
    /// Width of a tab in leading indentation.
    pub tab_width: u32,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            max_number_len: DEFAULT_MAX_NUMBER_LEN,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}
