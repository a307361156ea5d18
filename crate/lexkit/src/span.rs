// std imports
use std::fmt::{self, Display};

// ---

/// Position range within a single source line.
///
/// Lines and columns are 1-based, `col_end` is exclusive,
/// so a single character at column 5 has span `5..6`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Span {
    pub line: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl Span {
    #[inline]
    pub fn new(line: usize, col_start: usize, col_end: usize) -> Self {
        debug_assert!(line >= 1);
        debug_assert!(col_end >= col_start);
        Self {
            line,
            col_start,
            col_end,
        }
    }

    /// Returns a span covering exactly one column.
    #[inline]
    pub fn point(line: usize, col: usize) -> Self {
        Self::new(line, col, col + 1)
    }

    /// Returns a one-column span right after this one on the same line.
    #[inline]
    pub fn after(&self) -> Self {
        Self::point(self.line, self.col_end)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.col_end - self.col_start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.col_end == self.col_start
    }
}

impl Default for Span {
    #[inline]
    fn default() -> Self {
        Self::point(1, 1)
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.line, self.col_start, self.col_end)
    }
}
