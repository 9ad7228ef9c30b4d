//! quillc-lex - Lexical Analyzer for the Quill Contract Language
//!
//! This crate provides the lexer (tokenizer) for Quill, a statically-typed,
//! resource-oriented contract language. It transforms source text into a
//! position-annotated stream of tokens that can be consumed by the parser.
//!
//! # Overview
//!
//! Lexical analysis is the first phase of compilation. The lexer makes one
//! left-to-right pass over an immutable source string, classifying each
//! codepoint run into a token and annotating it with its exact half-open
//! source range. Whitespace is a real token carrying its text, so the
//! stream partitions the source with no gaps: concatenating every token's
//! text reconstructs the consumed input.
//!
//! Lexing never fails out-of-band. Malformed input produces a terminal
//! error token inside the stream, so one consumer loop handles success and
//! failure alike; a clean pass ends with a single zero-width end-of-input
//! token instead.
//!
//! # Example Usage
//!
//! ```
//! use quillc_lex::lex;
//! use quillc_lex::token::TokenKind;
//!
//! for token in lex("(2 + 3) * 4") {
//!     println!("{} at {}", token.kind, token.range.start);
//! }
//!
//! // Or drive the lexer one token at a time
//! let mut stream = lex("answer ?? 42");
//! assert_eq!(stream.next().unwrap().kind, TokenKind::Identifier);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, kind, and payload definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`classes`] - Character-class predicates
//! - [`stream`] - Pull- and push-based token stream renditions
//! - [`error`] - Lexical error values carried by error tokens

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Payload, Token, TokenKind};

/// Creates a token stream over the given source text.
///
/// Equivalent to [`TokenStream::new`]; this is the conventional entry
/// point for consumers.
///
/// # Examples
///
/// ```
/// use quillc_lex::{lex, TokenKind};
///
/// let tokens: Vec<_> = lex("0").collect();
/// assert_eq!(tokens[0].kind, TokenKind::Number);
/// assert_eq!(tokens[1].kind, TokenKind::Eof);
/// ```
pub fn lex(source: &str) -> TokenStream<'_> {
    TokenStream::new(source)
}
