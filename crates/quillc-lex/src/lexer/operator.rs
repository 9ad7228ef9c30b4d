//! Compound operator lexing.
//!
//! Single-symbol operators are handled directly in the dispatcher; this
//! module holds the rules that need lookahead beyond the first
//! character.

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a token starting with `?`.
    ///
    /// The only legal continuation is a second `?`, forming the
    /// nil-coalescing operator `??`. On a mismatch the continuation
    /// character is left unconsumed and a terminal error token is
    /// emitted over the `?` that was consumed, with a message naming
    /// the required character.
    ///
    /// Handles: `??`
    pub(crate) fn lex_question(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('?') {
            self.emit(TokenKind::NilCoalesce)
        } else {
            self.emit_error(LexError::ExpectedCharacter { expected: '?' })
        }
    }
}
