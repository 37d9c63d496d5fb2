//! Indentation stack.
//!
//! Holds the widths of every open block. The bottom entry is always `0`,
//! and widths strictly increase from bottom to top.

/// Widths of the currently open indentation blocks.
///
/// # Examples
///
/// ```
/// use snc_lex::indent::IndentStack;
///
/// let mut stack = IndentStack::new();
/// stack.push(2);
/// stack.push(4);
/// assert_eq!(stack.top(), 4);
/// assert_eq!(stack.below_top(), Some(2));
/// assert_eq!(stack.pop(), Some(4));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), None);
/// assert_eq!(stack.top(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<u32>,
}

impl IndentStack {
    const INITIAL_CAPACITY: usize = 8;

    /// A stack holding only the base level.
    pub fn new() -> Self {
        let mut levels = Vec::with_capacity(Self::INITIAL_CAPACITY);
        levels.push(0);
        Self { levels }
    }

    /// Width of the innermost open block.
    #[inline]
    pub fn top(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Width of the block enclosing the innermost one, if any.
    #[inline]
    pub fn below_top(&self) -> Option<u32> {
        self.levels.len().checked_sub(2).map(|i| self.levels[i])
    }

    /// Number of open blocks above the base level.
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Opens a block. `width` must exceed the current top.
    pub fn push(&mut self, width: u32) {
        debug_assert!(width > self.top(), "indent widths must strictly increase");
        self.levels.push(width);
    }

    /// Closes the innermost block and returns its width. The base level is
    /// never removed.
    pub fn pop(&mut self) -> Option<u32> {
        if self.levels.len() > 1 {
            self.levels.pop()
        } else {
            None
        }
    }

    /// All widths, bottom first.
    pub fn levels(&self) -> &[u32] {
        &self.levels
    }
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}
