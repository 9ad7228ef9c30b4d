//! Lexical error values.
//!
//! Lexing never panics and never returns a `Result`: every failure is a
//! regular value inside the token stream, carried by an error-kind token.
//! This module defines that value.

use thiserror::Error;

/// An error encountered while lexing.
///
/// Error tokens are always terminal: the lexer does not resynchronize
/// after emitting one. The `Display` output is the user-facing
/// diagnostic message; consumers pair it with the token's range.
///
/// # Examples
///
/// ```
/// use quillc_lex::error::LexError;
///
/// let err = LexError::ExpectedCharacter { expected: '?' };
/// assert_eq!(format!("{}", err), "expected character: U+003F '?'");
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// A compound operator prefix was not followed by its required
    /// continuation character.
    #[error("expected character: {}", notation(.expected))]
    ExpectedCharacter {
        /// The continuation character that was required.
        expected: char,
    },

    /// The current character matches no known token class.
    #[error("unrecognized character: {}", notation(.found))]
    UnrecognizedCharacter {
        /// The offending character.
        found: char,
    },
}

/// Formats a character in `U+XXXX 'c'` notation.
fn notation(c: &char) -> String {
    format!("U+{:04X} '{}'", *c as u32, c)
}
