//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use snc_util::span::{FileId, Span};
//!
//! // A span covering bytes 10..20 that starts on line 1, column 5
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//!
//! // Tag it with the file it came from
//! let span = span.with_file_id(FileId(3));
//! assert_eq!(span.file_id, FileId(3));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// Identifier of a source file registered in a [`SourceMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// Get the raw index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Placeholder id for spans not tied to a registered file
    pub const DUMMY: FileId = FileId(0);
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// A region of source text.
///
/// `start` and `end` are byte offsets (`end` exclusive). `line` and `column`
/// are 1-based and describe the first character of the region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based, in characters)
    pub column: u32,
    /// File the span belongs to
    pub file_id: FileId,
}

static_assertions::assert_impl_all!(Span: Send, Sync, Copy);

impl Span {
    /// An empty span at no particular location
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a span in the dummy file
    ///
    /// # Examples
    ///
    /// ```
    /// use snc_util::span::Span;
    ///
    /// let span = Span::new(4, 7, 2, 1);
    /// assert_eq!(span.line, 2);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a zero-length span at a line/column position
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Whether the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of bytes covered
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Return the same span tagged with `file_id`
    #[inline]
    pub fn with_file_id(mut self, file_id: FileId) -> Self {
        self.file_id = file_id;
        self
    }
}
