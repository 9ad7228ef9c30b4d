//! The token stream boundary between lexer and parser.
//!
//! The lexer is the producer, the parser an independent consumer; the
//! two are decoupled by an ordered, closable stream with exactly one
//! terminal token (end of input or error) and nothing after it.
//!
//! Two renditions satisfy that contract and agree element-wise:
//!
//! - [`TokenStream`]: pull-based. A fused iterator that computes the
//!   next token on demand and closes after the terminal token.
//! - [`spawn`]: push-based. A background producer thread feeding a
//!   bounded channel; the producer suspends when the buffer is full and
//!   exits as soon as the consumer drops the receiver, so an abandoned
//!   stream leaks nothing.

use std::iter::FusedIterator;
use std::thread;

use crossbeam::channel::{self, Receiver};

use crate::token::Token;
use crate::Lexer;

/// Buffer capacity for the push-based stream.
const TOKEN_BUFFER: usize = 64;

/// An incrementally-consumable stream of tokens over one source text.
///
/// Created fresh per input, never rewound or replayed. The iterator is
/// fused: after yielding the terminal token it returns `None` forever.
///
/// # Examples
///
/// ```
/// use quillc_lex::stream::TokenStream;
/// use quillc_lex::token::TokenKind;
///
/// let kinds: Vec<_> = TokenStream::new("1 + 2").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Number,
///         TokenKind::Space,
///         TokenKind::Plus,
///         TokenKind::Space,
///         TokenKind::Number,
///         TokenKind::Eof,
///     ],
/// );
/// ```
pub struct TokenStream<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            done: false,
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        let token = self.lexer.next_token();
        self.done = token.is_terminal();
        Some(token)
    }
}

impl FusedIterator for TokenStream<'_> {}

/// Lexes `source` on a background thread, delivering tokens through a
/// bounded channel.
///
/// Tokens arrive in exactly the order they were classified; the channel
/// closing after the terminal token is the completion signal. If the
/// consumer drops the receiver early, the producer's next send fails
/// and the thread exits.
///
/// # Examples
///
/// ```
/// use quillc_lex::stream::spawn;
/// use quillc_lex::token::TokenKind;
///
/// let tokens: Vec<_> = spawn("(2 + 3) * 4".to_string()).iter().collect();
/// assert_eq!(tokens.len(), 12);
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
/// ```
pub fn spawn(source: String) -> Receiver<Token> {
    let (sender, receiver) = channel::bounded(TOKEN_BUFFER);

    thread::spawn(move || {
        for token in TokenStream::new(&source) {
            if sender.send(token).is_err() {
                break;
            }
        }
    });

    receiver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_stream_is_fused_after_eof() {
        let mut stream = TokenStream::new("1");
        assert_eq!(stream.next().unwrap().kind, TokenKind::Number);
        assert_eq!(stream.next().unwrap().kind, TokenKind::Eof);
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn test_stream_closes_after_error() {
        let tokens: Vec<_> = TokenStream::new("1 ?X").collect();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Error);
        assert!(!tokens.iter().any(|t| t.kind == TokenKind::Eof));
    }

    #[test]
    fn test_spawn_matches_pull_based_stream() {
        let source = "(2 + 3) * 4\n?X";
        let pulled: Vec<_> = TokenStream::new(source).collect();
        let pushed: Vec<_> = spawn(source.to_string()).iter().collect();
        assert_eq!(pulled, pushed);
    }

    #[test]
    fn test_spawn_channel_closes_after_terminal() {
        let receiver = spawn("0".to_string());
        let tokens: Vec<_> = receiver.iter().collect();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn test_spawn_abandoned_consumer() {
        // Producer must not deadlock or leak when the receiver is
        // dropped before draining; the buffer bound forces the producer
        // to observe the disconnect.
        let source = "1 ".repeat(10_000);
        let receiver = spawn(source);
        let first = receiver.recv().unwrap();
        assert_eq!(first.kind, TokenKind::Number);
        drop(receiver);
    }
}
