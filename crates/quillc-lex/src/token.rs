//! Token type definitions.
//!
//! A token pairs a kind with the source range it covers and an optional
//! payload. Tokens are immutable value records: once emitted they hold
//! no references back into the lexer or the source text, so they can
//! cross the stream boundary freely.

use std::fmt;

use quillc_util::{Diagnostic, Range};

use crate::error::LexError;

/// The closed set of token kinds produced by the lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A decimal number literal.
    Number,
    /// An identifier.
    Identifier,
    /// A run of whitespace (spaces, tabs, newlines, in any mix).
    Space,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `??`, the nil-coalescing operator.
    NilCoalesce,
    /// End of input. Zero-width and terminal.
    Eof,
    /// A lexical error. Terminal; no token follows it.
    Error,
}

impl TokenKind {
    /// Returns the implicit source text of a fixed-shape token kind.
    ///
    /// Variable-width kinds (numbers, identifiers, whitespace) carry
    /// their text as a payload instead and return `None` here, as do
    /// the zero-width end-of-input kind and errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_lex::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::NilCoalesce.fixed_text(), Some("??"));
    /// assert_eq!(TokenKind::Number.fixed_text(), None);
    /// ```
    pub fn fixed_text(&self) -> Option<&'static str> {
        match self {
            TokenKind::ParenOpen => Some("("),
            TokenKind::ParenClose => Some(")"),
            TokenKind::Plus => Some("+"),
            TokenKind::Star => Some("*"),
            TokenKind::NilCoalesce => Some("??"),
            _ => None,
        }
    }

    /// Returns true if this kind ends the stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::Eof | TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number => write!(f, "number"),
            TokenKind::Identifier => write!(f, "identifier"),
            TokenKind::Space => write!(f, "whitespace"),
            TokenKind::ParenOpen => write!(f, "'('"),
            TokenKind::ParenClose => write!(f, "')'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::NilCoalesce => write!(f, "'??'"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Error => write!(f, "error"),
        }
    }
}

/// The optional payload attached to a token.
///
/// Modeled as a sum type so the terminal-token invariant is enforced by
/// construction: only the `Error` variant carries a diagnostic, and
/// fixed-shape tokens cannot accidentally carry text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// No payload (fixed-shape tokens and end of input).
    None,
    /// The exact consumed source text (numbers, identifiers, whitespace).
    Literal(String),
    /// The error carried by an error token.
    Error(LexError),
}

/// One classified unit of source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The token's kind.
    pub kind: TokenKind,
    /// The token's payload, if any.
    pub payload: Payload,
    /// The half-open source range the token covers.
    pub range: Range,
}

impl Token {
    /// Creates a token without a payload.
    pub fn new(kind: TokenKind, range: Range) -> Self {
        Self {
            kind,
            payload: Payload::None,
            range,
        }
    }

    /// Creates a token carrying its consumed source text.
    pub fn with_literal(kind: TokenKind, text: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            payload: Payload::Literal(text.into()),
            range,
        }
    }

    /// Creates a terminal error token.
    pub fn error(error: LexError, range: Range) -> Self {
        Self {
            kind: TokenKind::Error,
            payload: Payload::Error(error),
            range,
        }
    }

    /// Returns the source text this token stands for, if it has one.
    ///
    /// This is the literal payload for variable-width tokens and the
    /// fixed symbol text for fixed-shape tokens; `None` for end of
    /// input and errors. Concatenating `text()` over a stream in order
    /// reconstructs the consumed input exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_lex::token::{Token, TokenKind};
    /// use quillc_util::Range;
    ///
    /// let token = Token::with_literal(TokenKind::Number, "42", Range::default());
    /// assert_eq!(token.text(), Some("42"));
    /// ```
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Literal(text) => Some(text),
            Payload::Error(_) => None,
            Payload::None => self.kind.fixed_text(),
        }
    }

    /// Returns true if this token ends the stream.
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Converts an error token into a reportable diagnostic.
    ///
    /// Returns `None` for non-error tokens. The diagnostic's message is
    /// the error's user-facing text and its location anchor is the
    /// token's range.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_lex::error::LexError;
    /// use quillc_lex::token::Token;
    /// use quillc_util::Range;
    ///
    /// let token = Token::error(
    ///     LexError::ExpectedCharacter { expected: '?' },
    ///     Range::default(),
    /// );
    /// let diag = token.to_diagnostic().unwrap();
    /// assert_eq!(diag.message, "expected character: U+003F '?'");
    /// ```
    pub fn to_diagnostic(&self) -> Option<Diagnostic> {
        match &self.payload {
            Payload::Error(error) => Some(Diagnostic::error(error.to_string(), self.range)),
            _ => None,
        }
    }
}
