//! quillc-util - Core Utilities and Foundation Types
//!
//! This crate provides the fundamental types shared by every phase of the
//! quillc compiler: source positions and ranges for location tracking, and
//! the diagnostic surface through which phases report problems to users.
//!
//! # Module Structure
//!
//! - [`span`] - Source positions and half-open ranges
//! - [`diagnostic`] - Diagnostic levels, records, and the collecting handler

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use span::{Position, Range};
