//! Error and diagnostic system for the Dexmorph parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled byte spans for syntax errors
//! - Document paths for shape errors
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error message with optional error code, source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use dexmorph_parser::error::{Diagnostic, ErrorCode};
//! # use dexmorph_parser::{JsonPath, Span};
//!
//! let syntax = Diagnostic::error("expected `,` or `}`")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(12..13), "unexpected character");
//!
//! let shape = Diagnostic::error("`forms` must be an array, found a string")
//!     .with_code(ErrorCode::E201)
//!     .with_path(JsonPath::root().key("forms"))
//!     .with_help("wrap the form objects in `[...]`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
