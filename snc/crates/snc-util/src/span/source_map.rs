//! Source map for managing source files and computing source locations.
//!
//! The driver registers every input file here before lexing, and uses the
//! map afterwards to render the source line a diagnostic points at.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::{FileId, Span};
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and precomputed line table
///
/// # Examples
///
/// ```
/// use snc_util::span::SourceFile;
///
/// let file = SourceFile::new(0, "main.sn", "fn main():\n  return\n");
/// assert_eq!(file.name(), "main.sn");
/// assert_eq!(file.line_at(2), Some("  return"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    id: FileId,
    name: String,
    content: Arc<str>,
    /// Byte offset of the first character of every line
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(id: usize, name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            id: FileId(id),
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// The file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// The file name (path or display name)
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The full file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines (a trailing newline opens one more, empty line)
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Checked slice of the content
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        self.content
            .get(start..end)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

/// All source files of one compilation session.
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
    by_name: FxHashMap<String, FileId>,
}

impl SourceMap {
    /// Create an empty source map
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file, returning its id.
    ///
    /// Registering the same name twice returns the id of the first
    /// registration and keeps its content.
    ///
    /// # Examples
    ///
    /// ```
    /// use snc_util::span::SourceMap;
    ///
    /// let mut map = SourceMap::new();
    /// let a = map.add_file("a.sn", "x = 1\n");
    /// let again = map.add_file("a.sn", "ignored");
    /// assert_eq!(a, again);
    /// assert_eq!(map.iter().count(), 1);
    /// ```
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<Arc<str>>) -> FileId {
        let name = name.into();
        if let Some(&id) = self.by_name.get(&name) {
            return id;
        }
        let id = self.files.len();
        let file = SourceFile::new(id, name.clone(), content);
        let file_id = file.id();
        self.files.push(Arc::new(file));
        self.by_name.insert(name, file_id);
        file_id
    }

    /// Look up a file by id
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        self.files.get(id.0).cloned()
    }

    /// Look up a file by id, failing with [`SourceMapError::FileNotFound`]
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Iterate over the registered files in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }

    /// Render the source line of `span` with a caret underline.
    ///
    /// ```text
    ///   --> main.sn:2:5
    ///    2 |   x = @
    ///      |       ^
    /// ```
    ///
    /// A span running over several lines is underlined to the end of its
    /// first line. Carets count characters, not bytes.
    pub fn format_span(&self, span: Span) -> SourceMapResult<String> {
        let file = self.get_file(span.file_id)?;
        let text = file.extract_range(span.start, span.end)?;
        let line = file
            .line_at(span.line as usize)
            .ok_or(SourceMapError::SpanOutOfBounds {
                file_len: file.content().len(),
                span_start: span.start,
                span_end: span.end,
            })?;
        let width = file.line_count().to_string().len().max(3);

        let underline_start = (span.column as usize).saturating_sub(1);
        let underline_len = text
            .lines()
            .next()
            .map_or(0, |first| first.chars().count())
            .max(1);

        let mut result = format!("--> {}:{}:{}\n", file.name(), span.line, span.column);
        result.push_str(&format!("{:>width$} | {}\n", span.line, line, width = width));
        result.push_str(&format!("{:>width$} | ", "", width = width));
        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_source_file_new() {
        let file = SourceFile::new(0, "test.sn", "fn main():");
        assert_eq!(file.id().0, 0);
        assert_eq!(file.name(), "test.sn");
        assert_eq!(file.content(), "fn main():");
    }

    #[test]
    fn test_source_file_line_count() {
        let file = SourceFile::new(0, "test.sn", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);
    }

    #[test]
    fn test_source_file_line_at() {
        let file = SourceFile::new(0, "test.sn", "line1\r\nline2\nline3");
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(1), Some("line1"));
        assert_eq!(file.line_at(2), Some("line2"));
        assert_eq!(file.line_at(3), Some("line3"));
        assert_eq!(file.line_at(4), None);
    }

    #[test]
    fn test_source_file_extract_range() {
        let file = SourceFile::new(0, "test.sn", "fn main():");
        assert_eq!(file.extract_range(3, 7).unwrap(), "main");
        assert!(file.extract_range(7, 3).is_err());
        assert!(file.extract_range(0, 100).is_err());
    }

    #[test]
    fn test_source_map_add_and_get() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.sn", "x = 1");
        assert_eq!(map.get(id).unwrap().name(), "main.sn");
        assert!(map.get(FileId(1)).is_none());
    }

    #[test]
    fn test_source_map_get_file_not_found() {
        let map = SourceMap::new();
        assert!(matches!(
            map.get_file(FileId(0)),
            Err(SourceMapError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_source_map_format_span() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.sn", "x = 1\ny = @\n");
        let span = Span::new(10, 11, 2, 5).with_file_id(id);
        let formatted = map.format_span(span).unwrap();
        assert!(formatted.starts_with("--> main.sn:2:5"));
        assert!(formatted.contains("y = @"));
        assert!(formatted.ends_with("    ^"));
    }

    #[test]
    fn test_format_span_underlines_first_line_in_chars() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.sn", "s = \"héé\nrest");
        let span = Span::new(4, 14, 1, 5).with_file_id(id);
        let formatted = map.format_span(span).unwrap();
        assert!(formatted.ends_with("    ^^^^"));
        assert!(!formatted.contains("rest"));
    }

    #[test]
    fn test_format_span_errors() {
        let mut map = SourceMap::new();
        let id = map.add_file("main.sn", "x = 1");
        assert!(matches!(
            map.format_span(Span::new(0, 1, 1, 1).with_file_id(FileId(4))),
            Err(SourceMapError::FileNotFound(_))
        ));
        assert_eq!(
            map.format_span(Span::new(3, 9, 1, 4).with_file_id(id)),
            Err(SourceMapError::SpanOutOfBounds {
                file_len: 5,
                span_start: 3,
                span_end: 9,
            })
        );
        assert_eq!(
            map.format_span(Span::new(4, 2, 1, 5).with_file_id(id)),
            Err(SourceMapError::InvalidSpan { start: 4, end: 2 })
        );
    }

    #[quickcheck]
    fn prop_line_at_never_contains_newline(content: String, line: usize) -> bool {
        let file = SourceFile::new(0, "prop.sn", content);
        match file.line_at(line % (file.line_count() + 2)) {
            Some(text) => !text.contains('\n'),
            None => true,
        }
    }
}
