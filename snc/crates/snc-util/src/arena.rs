//! Bump arena backing all token text of one compilation unit.
//!
//! Every allocation lives until the arena is dropped (or [`Arena::reset`]),
//! so nothing handed out here is ever freed individually. Allocation failure
//! aborts the process: no partial-failure path exists.

use bumpalo::Bump;

/// Growable string whose storage lives in an [`Arena`].
///
/// Grows by doubling like `std::string::String` and freezes into an
/// arena-owned `&str` with `into_bump_str`.
pub type ArenaString<'a> = bumpalo::collections::String<'a>;

/// A bump allocator scoped to one compilation unit.
///
/// # Examples
///
/// ```
/// use snc_util::Arena;
///
/// let arena = Arena::new();
/// let name = arena.alloc_str("main");
/// let mut buffer = arena.string_with_capacity(4);
/// buffer.push_str("hello, ");
/// buffer.push_str(name);
/// assert_eq!(buffer.into_bump_str(), "hello, main");
/// ```
#[derive(Default)]
pub struct Arena {
    bump: Bump,
}

impl Arena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create an arena with `bytes` preallocated
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Move `value` into the arena
    #[inline]
    pub fn alloc<T>(&self, value: T) -> &mut T {
        self.bump.alloc(value)
    }

    /// Duplicate a string into the arena
    #[inline]
    pub fn alloc_str(&self, text: &str) -> &str {
        self.bump.alloc_str(text)
    }

    /// Duplicate a fixed-length byte range into the arena
    #[inline]
    pub fn alloc_bytes(&self, bytes: &[u8]) -> &[u8] {
        self.bump.alloc_slice_copy(bytes)
    }

    /// Start a growable scratch string backed by the arena
    #[inline]
    pub fn string_with_capacity(&self, capacity: usize) -> ArenaString<'_> {
        ArenaString::with_capacity_in(capacity, &self.bump)
    }

    /// Bytes currently held by the arena's chunks
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }

    /// Release every allocation at once, keeping the largest chunk for reuse
    pub fn reset(&mut self) {
        self.bump.reset();
    }
}

impl std::fmt::Debug for Arena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("allocated_bytes", &self.allocated_bytes())
            .finish()
    }
}
