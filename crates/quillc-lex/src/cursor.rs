//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for token ranges.

use quillc_util::Position;

/// A cursor for traversing source code character by character.
///
/// The cursor is the single source of truth for "where are we in the
/// input" and "what comes next". It provides bounded lookahead without
/// consumption and consumption that keeps line/column/offset bookkeeping
/// exact, including across newlines. Lines are 1-based, columns 0-based.
///
/// # Example
///
/// ```
/// use quillc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("1 ?? 2");
/// assert_eq!(cursor.current_char(), '1');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte offset in the source.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, in codepoints).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the current character at the cursor position.
    ///
    /// Returns '\0' (null character) if at the end of the source.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.current_char(), 'a');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        if self.offset >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII (most common case)
        let b = self.source.as_bytes()[self.offset];
        if b < 128 {
            return b as char;
        }

        // Slow path for UTF-8
        self.source[self.offset..].chars().next().unwrap_or('\0')
    }

    /// Returns the character at lookahead distance `k` (0 = current).
    ///
    /// Distance is measured in codepoints, not bytes. Returns '\0' for
    /// any distance past the last codepoint.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("?X");
    /// assert_eq!(cursor.peek_char(0), '?');
    /// assert_eq!(cursor.peek_char(1), 'X');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, k: usize) -> char {
        self.source[self.offset..].chars().nth(k).unwrap_or('\0')
    }

    /// Advances the cursor by exactly one codepoint.
    ///
    /// Updates the byte offset by the codepoint's width, and line/column
    /// tracking: a newline bumps the line and resets the column to 0,
    /// everything else bumps the column. Does nothing if already at end.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.line(), 2);
    /// assert_eq!(cursor.column(), 0);
    /// ```
    #[inline]
    pub fn advance(&mut self) {
        if self.offset >= self.source.len() {
            return;
        }

        // Fast path for ASCII (most common)
        let b = self.source.as_bytes()[self.offset];
        if b < 128 {
            self.offset += 1;
            if b == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            return;
        }

        // Slow path for UTF-8 multi-byte characters
        if let Some(c) = self.source[self.offset..].chars().next() {
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    /// Matches and consumes the expected character if present.
    ///
    /// Returns true if the character was matched and consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("??");
    /// assert!(cursor.match_char('?'));
    /// assert!(cursor.match_char('?'));
    /// assert!(!cursor.match_char('?'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte offset in the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the current position as a value record.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    /// use quillc_util::Position;
    ///
    /// let cursor = Cursor::new("abc");
    /// assert_eq!(cursor.pos(), Position::ORIGIN);
    /// ```
    pub fn pos(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// Returns a slice of the source from the given byte offset to the
    /// current position.
    ///
    /// # Example
    ///
    /// ```
    /// use quillc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("042 ");
    /// let start = cursor.offset();
    /// cursor.advance();
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.slice_from(start), "042");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.offset]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("1 + 2");
        assert_eq!(cursor.current_char(), '1');
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.current_char(), 'a');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'c');
        cursor.advance();
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'β');
        // offset advances by byte width, column by one codepoint
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_peek_char() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        assert_eq!(cursor.peek_char(100), '\0');
    }

    #[test]
    fn test_peek_char_counts_codepoints() {
        let cursor = Cursor::new("α?");
        assert_eq!(cursor.peek_char(0), 'α');
        assert_eq!(cursor.peek_char(1), '?');
    }

    #[test]
    fn test_peek_never_consumes() {
        let cursor = Cursor::new("ab");
        let _ = cursor.peek_char(1);
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_is_at_end() {
        let mut cursor = Cursor::new("a");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("??");
        assert!(cursor.match_char('?'));
        assert!(!cursor.match_char('X'));
        assert!(cursor.match_char('?'));
        assert!(!cursor.match_char('?'));
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 0);

        cursor.advance(); // 'a'
        cursor.advance(); // 'b'
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 2);

        cursor.advance(); // '\n'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 0);

        cursor.advance(); // 'c'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_pos_snapshot() {
        let mut cursor = Cursor::new("1 \n  2");
        for _ in 0..5 {
            cursor.advance();
        }
        let pos = cursor.pos();
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 2);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("_test_123 ");
        let start = cursor.offset();
        for _ in 0..9 {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "_test_123");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.pos(), quillc_util::Position::ORIGIN);
    }
}
