//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! a [`Position`] is a single point in the source, and a [`Range`] is a
//! half-open `[start, end)` pair of positions delimiting a token or
//! larger construct.
//!
//! # Examples
//!
//! ```
//! use quillc_util::span::{Position, Range};
//!
//! let start = Position::new(1, 0, 0);
//! let end = Position::new(1, 3, 3);
//! let range = Range::new(start, end);
//! assert_eq!(range.len(), 3);
//! ```

use std::fmt;

/// A point in source text.
///
/// `line` is 1-based and `column` is 0-based, matching the form consumed
/// by diagnostic reporting. `offset` is the 0-based byte offset into the
/// source; line and column advance per codepoint, so all three agree on
/// ASCII text while multi-byte codepoints widen `offset` only.
///
/// # Examples
///
/// ```
/// use quillc_util::span::Position;
///
/// let pos = Position::new(2, 4, 10);
/// assert_eq!(pos.line, 2);
/// assert_eq!(format!("{}", pos), "line 2, column 4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based, in codepoints).
    pub column: u32,
    /// Byte offset into the source (0-based).
    pub offset: usize,
}

impl Position {
    /// The position at the very start of a source text.
    pub const ORIGIN: Position = Position {
        line: 1,
        column: 0,
        offset: 0,
    };

    /// Create a new position.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::Position;
    ///
    /// let pos = Position::new(1, 5, 5);
    /// assert_eq!(pos.column, 5);
    /// ```
    #[inline]
    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

impl Default for Position {
    #[inline]
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A half-open `[start, end)` range in source text.
///
/// `start` is the position immediately before the first codepoint of the
/// covered text and `end` the position immediately after its last
/// codepoint. In a gapless token stream each token's `end` equals the
/// next token's `start`.
///
/// # Examples
///
/// ```
/// use quillc_util::span::{Position, Range};
///
/// let range = Range::new(Position::new(1, 0, 0), Position::new(1, 2, 2));
/// assert!(!range.is_empty());
/// assert!(range.contains(1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Range {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Range {
    /// Create a new range.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::{Position, Range};
    ///
    /// let range = Range::new(Position::ORIGIN, Position::new(1, 1, 1));
    /// assert_eq!(range.start, Position::ORIGIN);
    /// ```
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a zero-width range at a single position.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::{Position, Range};
    ///
    /// let point = Range::point(Position::new(3, 0, 7));
    /// assert!(point.is_empty());
    /// assert_eq!(point.start, point.end);
    /// ```
    #[inline]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns true if this range is zero-width (start == end).
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::{Position, Range};
    ///
    /// assert!(Range::point(Position::ORIGIN).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }

    /// Returns the length of the range in bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::{Position, Range};
    ///
    /// let range = Range::new(Position::new(1, 0, 0), Position::new(1, 4, 4));
    /// assert_eq!(range.len(), 4);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Check if this range contains a byte offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::{Position, Range};
    ///
    /// let range = Range::new(Position::new(1, 2, 2), Position::new(1, 4, 4));
    /// assert!(range.contains(3));
    /// assert!(!range.contains(4));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start.offset <= offset && offset < self.end.offset
    }

    /// Join two adjacent ranges into a single range.
    ///
    /// Returns `None` if the ranges are not adjacent
    /// (`self.end != other.start`).
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::span::{Position, Range};
    ///
    /// let a = Range::new(Position::new(1, 0, 0), Position::new(1, 2, 2));
    /// let b = Range::new(Position::new(1, 2, 2), Position::new(1, 5, 5));
    /// let joined = a.join(b).unwrap();
    /// assert_eq!(joined.len(), 5);
    /// ```
    #[inline]
    pub fn join(self, other: Range) -> Option<Range> {
        if self.end == other.start {
            Some(Range {
                start: self.start,
                end: other.end,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}
