//! Identifier lexing.
//!
//! This module handles lexing of identifiers.

use crate::classes::is_ident_continue;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier.
    ///
    /// The first character (a letter or underscore) has already been
    /// classified by the dispatcher; this consumes it and then the
    /// maximal run of letters, digits, and underscores. Digits are
    /// legal anywhere except the first position.
    ///
    /// # Returns
    ///
    /// A [`TokenKind::Identifier`] token whose payload is the consumed
    /// text.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        self.cursor.advance();
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        self.emit_literal(TokenKind::Identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillc_util::Position;

    fn lex_ident(source: &str) -> Token {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_simple_identifier() {
        let token = lex_ident("test");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text(), Some("test"));
        assert_eq!(token.range.end, Position::new(1, 4, 4));
    }

    #[test]
    fn test_leading_underscore_and_trailing_digits() {
        let token = lex_ident("_test_123");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text(), Some("_test_123"));
        assert_eq!(token.range.end, Position::new(1, 9, 9));
    }

    #[test]
    fn test_lone_underscore() {
        let token = lex_ident("_");
        assert_eq!(token.kind, TokenKind::Identifier);
        assert_eq!(token.text(), Some("_"));
    }

    #[test]
    fn test_stops_at_class_boundary() {
        let token = lex_ident("abc def");
        assert_eq!(token.text(), Some("abc"));
    }
}
