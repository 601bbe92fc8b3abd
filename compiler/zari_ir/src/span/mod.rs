//! Source locations.
//!
//! A [`TextPos`] is an opaque position inside a [`SourceBuffer`](crate::SourceBuffer).
//! It is stored as a byte offset that always sits on a UTF-8 character
//! boundary, but every public operation that moves or measures positions
//! (`SourceBuffer::advance`, `SourceBuffer::distance`) counts characters.
//!
//! A [`Span`] is a half-open character range starting at a `TextPos`, with
//! the 1-based line and column of its start cached at creation.

use std::fmt;

/// Opaque position in a source buffer.
///
/// Only meaningful together with the buffer that produced it. Ordering
/// follows the position in the text.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct TextPos(usize);

impl TextPos {
    /// Start of every buffer.
    pub const ZERO: TextPos = TextPos(0);

    /// Create a position from a byte offset.
    ///
    /// The offset must lie on a character boundary of the buffer it is used
    /// with. Buffer methods assert this before slicing.
    #[inline]
    pub const fn from_byte_offset(offset: usize) -> Self {
        TextPos(offset)
    }

    /// Byte offset of this position.
    #[inline]
    pub const fn byte_offset(self) -> usize {
        self.0
    }
}

impl fmt::Debug for TextPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Half-open character range into a source buffer.
///
/// `len` counts characters, not bytes. It may grow through [`extend`](Self::extend)
/// while the scanner assembles a token; `line` and `column` describe `start`
/// and never change.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Span {
    pub start: TextPos,
    pub len: usize,
    pub line: u32,
    pub column: u32,
}

impl Span {
    /// Create a span of `len` characters at `start`.
    #[inline]
    pub const fn new(start: TextPos, len: usize, line: u32, column: u32) -> Self {
        Span {
            start,
            len,
            line,
            column,
        }
    }

    /// Zero-length span at `start`.
    #[inline]
    pub const fn point(start: TextPos, line: u32, column: u32) -> Self {
        Span::new(start, 0, line, column)
    }

    /// Grow the span by `k` characters.
    #[inline]
    pub fn extend(&mut self, k: usize) {
        self.len += k;
    }

    /// Whether the span covers no characters.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
