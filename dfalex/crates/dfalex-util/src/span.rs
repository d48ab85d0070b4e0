//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token (or a diagnostic) sits in the input:
//! the byte range it covers plus the line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use dfalex_util::span::Span;
//!
//! let span = Span::new(4, 9, 1, 5);
//! assert_eq!(span.len(), 5);
//! assert_eq!(span.to_string(), "1:5");
//! ```

use std::fmt;
use std::ops::Range;

/// Source location span
///
/// Byte offsets index into the original `&str`; `line` and `column` are
/// 1-based and count characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source (inclusive)
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use dfalex_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The byte range covered by this span, suitable for slicing the source.
    ///
    /// ```
    /// use dfalex_util::span::Span;
    ///
    /// let source = "let x";
    /// let span = Span::new(4, 5, 1, 5);
    /// assert_eq!(&source[span.range()], "x");
    /// ```
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
