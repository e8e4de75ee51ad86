//! Reading JSON text into a document tree.
//!
//! Object key order is preserved as written, so keys the converters copy
//! through keep their source order.

use log::trace;
use serde_json::{Value, error::Category};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
};

/// Parse `source` as a single JSON value.
pub(crate) fn parse_json(source: &str) -> Result<Value, ParseError> {
    let value = serde_json::from_str(source).map_err(|err| syntax_diagnostic(source, &err))?;
    trace!(bytes = source.len(); "JSON text read");
    Ok(value)
}

fn syntax_diagnostic(source: &str, err: &serde_json::Error) -> Diagnostic {
    let span = Span::from_line_column(source, err.line(), err.column());
    let message = strip_location(err);

    let (code, label, help) = match err.classify() {
        Category::Eof => (
            ErrorCode::E002,
            "input ends here",
            "the document is truncated; close every `{` and `[`",
        ),
        Category::Data => (
            ErrorCode::E003,
            "value cannot be represented",
            "check numbers and strings at this position",
        ),
        Category::Syntax | Category::Io => (
            ErrorCode::E001,
            "unexpected input",
            "the file must contain a single JSON object",
        ),
    };

    Diagnostic::error(message)
        .with_code(code)
        .with_label(span, label)
        .with_help(help)
}

/// The reader's message without the trailing "at line L column C".
fn strip_location(err: &serde_json::Error) -> String {
    let message = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match message.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => message,
    }
}
