//! Character cursor for traversing the input.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through the input one character at a time. It handles
//! UTF-8 correctly and tracks line/column information for spans.

/// A cursor over a `&str`, one `char` at a time.
///
/// The cursor never mutates the input; it only moves a byte offset forward
/// and keeps the matching 1-based line and column.
///
/// # Example
///
/// ```
/// use dfalex_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("if x");
///
/// assert_eq!(cursor.current_char(), Some('i'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some('f'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The input being traversed.
    source: &'a str,

    /// Current byte position in the input.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    ///
    /// Unlike a sentinel character, `None` cannot collide with a NUL byte
    /// that is genuinely part of the input.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        let rest = self.source.get(self.position..)?;

        // Fast path for ASCII (most common case)
        match rest.as_bytes().first() {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => rest.chars().next(),
            None => None,
        }
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    ///
    /// ```
    /// use dfalex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 1);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.current_char() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Returns true if the cursor is at the end of the input.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the input.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the slice of the input from `start` up to the cursor.
    ///
    /// ```
    /// use dfalex_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("iffy x");
    /// let start = cursor.position();
    /// for _ in 0..4 {
    ///     cursor.advance();
    /// }
    /// assert_eq!(cursor.slice_from(start), "iffy");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the full input text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Captures the current position so a token start can be remembered.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }
}

/// A saved cursor position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in the input.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Default for CursorSnapshot {
    fn default() -> Self {
        Self {
            position: 0,
            line: 1,
            column: 1,
        }
    }
}
