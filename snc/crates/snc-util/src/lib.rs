//! snc-util - Core Utilities and Foundation Types
//!
//! Foundation shared by every phase of the Sindarin compiler:
//!
//! - [`span`] - byte/line/column locations and the [`SourceMap`]
//! - [`diagnostic`] - errors with their notes, helps and codes, and the [`Handler`]
//! - [`arena`] - the bump allocator that owns token text
//! - [`error`] - error types of this crate

pub mod arena;
pub mod diagnostic;
pub mod error;
pub mod span;

pub use arena::{Arena, ArenaString};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, SourceFile, SourceMap, Span};
