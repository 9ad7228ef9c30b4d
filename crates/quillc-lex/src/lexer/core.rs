//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use quillc_util::{Position, Range};

use crate::classes::{is_ident_start, is_space};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::token::{Token, TokenKind};

/// Lexer for the Quill contract language.
///
/// The lexer transforms source text into a stream of tokens in a single
/// left-to-right pass. Classification is maximal-munch within a token
/// class and never crosses a class boundary; whitespace is emitted as a
/// real token carrying its exact text, so concatenating the stream's
/// token texts reconstructs the consumed input.
///
/// Failures are not raised: both error taxa (a compound-operator prefix
/// missing its continuation, and a character outside every class) become
/// terminal error tokens inside the stream.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Position where the current token starts.
    pub(crate) token_start: Position,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: Position::ORIGIN,
        }
    }

    /// Returns the next token from the source text.
    ///
    /// This is the main entry point for tokenization: one decision per
    /// lookahead class, then the class's consumption rule. At end of
    /// input it returns the zero-width [`TokenKind::Eof`] token; calling
    /// it again after a terminal token would return another EOF, so the
    /// stream wrapper stops pulling once a terminal token is out.
    pub fn next_token(&mut self) -> Token {
        self.token_start = self.cursor.pos();

        if self.cursor.is_at_end() {
            return self.emit(TokenKind::Eof);
        }

        match self.cursor.current_char() {
            '(' => {
                self.cursor.advance();
                self.emit(TokenKind::ParenOpen)
            },
            ')' => {
                self.cursor.advance();
                self.emit(TokenKind::ParenClose)
            },
            '+' => {
                self.cursor.advance();
                self.emit(TokenKind::Plus)
            },
            '*' => {
                self.cursor.advance();
                self.emit(TokenKind::Star)
            },
            '?' => self.lex_question(),
            c if is_space(c) => self.lex_space(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => {
                self.cursor.advance();
                self.emit_error(LexError::UnrecognizedCharacter { found: c })
            },
        }
    }

    /// The range from the current token's start to the cursor.
    fn token_range(&self) -> Range {
        Range::new(self.token_start, self.cursor.pos())
    }

    /// Emits a token without a payload over the consumed range.
    pub(crate) fn emit(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.token_range())
    }

    /// Emits a token carrying the exact consumed text as its payload.
    pub(crate) fn emit_literal(&self, kind: TokenKind) -> Token {
        let text = self.cursor.slice_from(self.token_start.offset);
        Token::with_literal(kind, text, self.token_range())
    }

    /// Emits a terminal error token over the consumed range.
    pub(crate) fn emit_error(&self, error: LexError) -> Token {
        Token::error(error, self.token_range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Payload;
    use quillc_util::Position;

    fn first_token(source: &str) -> Token {
        Lexer::new(source).next_token()
    }

    #[test]
    fn test_paren_open() {
        let token = first_token("(");
        assert_eq!(token.kind, TokenKind::ParenOpen);
        assert_eq!(token.payload, Payload::None);
        assert_eq!(token.range.end, Position::new(1, 1, 1));
    }

    #[test]
    fn test_paren_close() {
        assert_eq!(first_token(")").kind, TokenKind::ParenClose);
    }

    #[test]
    fn test_plus() {
        assert_eq!(first_token("+").kind, TokenKind::Plus);
    }

    #[test]
    fn test_star() {
        assert_eq!(first_token("*").kind, TokenKind::Star);
    }

    #[test]
    fn test_eof_is_zero_width() {
        let token = first_token("");
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.range, Range::point(Position::ORIGIN));
    }

    #[test]
    fn test_unrecognized_character() {
        let token = first_token("#");
        assert_eq!(token.kind, TokenKind::Error);
        assert_eq!(
            token.payload,
            Payload::Error(LexError::UnrecognizedCharacter { found: '#' }),
        );
        // width 1, covering exactly the offending character
        assert_eq!(token.range.start, Position::new(1, 0, 0));
        assert_eq!(token.range.end, Position::new(1, 1, 1));
    }

    #[test]
    fn test_carriage_return_is_unrecognized() {
        let token = first_token("\r");
        assert_eq!(token.kind, TokenKind::Error);
    }

    #[test]
    fn test_tokens_do_not_cross_class_boundaries() {
        let mut lexer = Lexer::new("12ab");
        let number = lexer.next_token();
        assert_eq!(number.kind, TokenKind::Number);
        assert_eq!(number.text(), Some("12"));

        let ident = lexer.next_token();
        assert_eq!(ident.kind, TokenKind::Identifier);
        assert_eq!(ident.text(), Some("ab"));
    }
}
