//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, formatting, and collecting
//! compiler diagnostics. Phases produce [`Diagnostic`] values anchored to
//! a source [`Range`]; the [`Handler`] collects them so a driver can
//! decide how to present them.
//!
//! # Examples
//!
//! ```
//! use quillc_util::diagnostic::{Diagnostic, Handler};
//! use quillc_util::span::{Position, Range};
//!
//! let handler = Handler::new();
//! let range = Range::point(Position::new(1, 2, 2));
//! handler.report(Diagnostic::error("expected character: U+003F '?'", range));
//!
//! assert!(handler.has_errors());
//! ```

use std::cell::RefCell;
use std::fmt;

use crate::span::Range;

/// Diagnostic severity level.
///
/// # Examples
///
/// ```
/// use quillc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents compilation.
    Error,
    /// A warning that doesn't prevent compilation.
    Warning,
    /// Additional information about a diagnostic.
    Note,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and source location.
///
/// Rendering places the location after the message in the
/// "line N, column M" form:
///
/// ```
/// use quillc_util::diagnostic::Diagnostic;
/// use quillc_util::span::{Position, Range};
///
/// let range = Range::point(Position::new(1, 2, 2));
/// let diag = Diagnostic::error("expected character: U+003F '?'", range);
/// assert_eq!(
///     format!("{}", diag),
///     "error: expected character: U+003F '?' (line 1, column 2)",
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location.
    pub range: Range,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, range: Range) -> Self {
        Self {
            level,
            message: message.into(),
            range,
        }
    }

    /// Create an error-level diagnostic.
    ///
    /// # Examples
    ///
    /// ```
    /// use quillc_util::diagnostic::{Diagnostic, Level};
    /// use quillc_util::span::Range;
    ///
    /// let diag = Diagnostic::error("something went wrong", Range::default());
    /// assert_eq!(diag.level, Level::Error);
    /// ```
    pub fn error(message: impl Into<String>, range: Range) -> Self {
        Self::new(Level::Error, message, range)
    }

    /// Create a warning-level diagnostic.
    pub fn warning(message: impl Into<String>, range: Range) -> Self {
        Self::new(Level::Warning, message, range)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.level, self.message, self.range.start)
    }
}

/// Collects diagnostics produced during a compilation phase.
///
/// The handler uses interior mutability so producers only need a shared
/// reference.
///
/// # Examples
///
/// ```
/// use quillc_util::diagnostic::{Diagnostic, Handler};
/// use quillc_util::span::Range;
///
/// let handler = Handler::new();
/// assert!(!handler.has_errors());
///
/// handler.report(Diagnostic::error("boom", Range::default()));
/// assert_eq!(handler.take().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic.
    pub fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error-level diagnostic has been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Returns the number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if no diagnostics have been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Take all recorded diagnostics, leaving the handler empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
