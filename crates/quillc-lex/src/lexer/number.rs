//! Number literal lexing.
//!
//! This module handles lexing of decimal number literals.

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal.
    ///
    /// Consumes the maximal contiguous run of decimal digits. The run
    /// stops the instant a non-digit appears, so `12ab` lexes as the
    /// number `12` followed by the identifier `ab`. Leading zeros are
    /// preserved in the payload (`01` stays `"01"`).
    ///
    /// # Returns
    ///
    /// A [`TokenKind::Number`] token whose payload is the consumed text.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        self.emit_literal(TokenKind::Number)
    }
}
