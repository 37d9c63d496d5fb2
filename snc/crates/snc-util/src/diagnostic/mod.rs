//! Diagnostic module - Error reporting infrastructure.
//!
//! The lexer never reports anything itself: it returns error tokens, and the
//! consumer turns them into [`Diagnostic`]s and collects them in a
//! [`Handler`].
//!
//! # Examples
//!
//! ```
//! use snc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use snc_util::Span;
//!
//! let handler = Handler::new();
//! let diag = DiagnosticBuilder::error("Unterminated string starting at line 3")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(20, 31, 3, 9))
//!     .build();
//! assert_eq!(diag.to_string(), "error[E1002]: Unterminated string starting at line 3");
//!
//! handler.emit_diagnostic(diag);
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// `Note` and `Help` label the lines attached under a headline.
///
/// # Examples
///
/// ```
/// use snc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Help), "help");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents compilation
    Error,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location
///
/// Built with [`DiagnosticBuilder`].
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Notes then helps, each paired with the level it is rendered under
    pub fn children(&self) -> impl Iterator<Item = (Level, &str)> {
        let notes = self.notes.iter().map(|n| (Level::Note, n.as_str()));
        let helps = self.helps.iter().map(|h| (Level::Help, h.as_str()));
        notes.chain(helps)
    }
}

/// Renders the headline, e.g. `error[E1001]: Unexpected character '@'`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Collects diagnostics for one compilation session.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Whether any error-level diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Snapshot of all recorded diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
