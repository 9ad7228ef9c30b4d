//! Whitespace-run lexing.
//!
//! Whitespace is not skipped: it is emitted as a real token carrying its
//! exact text, so a stream consumer can reconstruct the source and a
//! formatter can preserve layout.

use crate::classes::is_space;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a whitespace run.
    ///
    /// Consumes the maximal contiguous run of spaces, tabs, and
    /// newlines in any mix. Embedded newlines update line/column
    /// bookkeeping per character, so a run like `" \n  "` ends two
    /// columns into the next line.
    ///
    /// # Returns
    ///
    /// A single [`TokenKind::Space`] token spanning the whole run, with
    /// the exact consumed text as its payload.
    pub(crate) fn lex_space(&mut self) -> Token {
        while is_space(self.cursor.current_char()) {
            self.cursor.advance();
        }

        self.emit_literal(TokenKind::Space)
    }
}
