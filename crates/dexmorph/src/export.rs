//! Writing converted documents as text.
//!
//! Output is indented JSON with keys in the order the converters built them
//! and non-ASCII characters written as-is, so equal documents always produce
//! byte-identical text.

use serde::{Serialize, ser::Error as _};
use serde_json::{Serializer, Value, ser::PrettyFormatter};

/// Serialize `value` with `indent` spaces per level.
pub(crate) fn to_json_text(value: &Value, indent: usize) -> Result<String, serde_json::Error> {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(serde_json::Error::custom)
}
