//! # Dexmorph Parser
//!
//! Reader for legacy Pixelmon species documents. This crate turns source
//! text into the typed [`SourceDocument`] the converters consume.
//!
//! ## Usage
//!
//! ```
//! # use dexmorph_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{"name": "Eevee", "forms": [{"name": ""}]}"#;
//!
//!     let document = parse(source)?;
//!     assert_eq!(document.forms().len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;

mod json_path;
mod shape;
mod span;
mod syntax;

pub use json_path::JsonPath;
pub use span::Span;

use log::debug;
use serde_json::Value;

use dexmorph_core::source::SourceDocument;

use error::ParseError;

/// Parse source text into a typed legacy document.
///
/// This runs the whole front end:
///
/// 1. **Read** - Parse the text as JSON, keeping key order
/// 2. **Shape** - Check container types and build the typed model
///
/// # Errors
///
/// Returns a [`ParseError`] with byte spans for malformed JSON, or with
/// document paths for values of the wrong kind. Missing optional fields are
/// never errors.
pub fn parse(source: &str) -> Result<SourceDocument, ParseError> {
    // Step 1: Read
    let value = syntax::parse_json(source)?;

    // Step 2: Shape
    let document = shape::shape_document(&value)?;

    debug!(forms = document.forms().len(); "Source document parsed");
    Ok(document)
}

/// Parse source text as JSON without checking its shape.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying an `E0xx` code and a byte span.
pub fn parse_json(source: &str) -> Result<Value, ParseError> {
    syntax::parse_json(source)
}

/// Check the shape of an already parsed document.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying `E2xx` codes and document paths.
///
/// # Example
///
/// ```
/// # use dexmorph_parser::parse_value;
/// # use serde_json::json;
///
/// let err = parse_value(&json!({"forms": "base"})).unwrap_err();
/// assert!(err.to_string().contains("E201"));
/// ```
pub fn parse_value(value: &Value) -> Result<SourceDocument, ParseError> {
    shape::shape_document(value)
}
