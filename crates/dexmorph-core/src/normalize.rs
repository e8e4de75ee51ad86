//! Namespace qualification, form-name defaults, and presence checks.
//!
//! Legacy documents freely mix "absent key", `null`, and blank strings to mean
//! "no value". The helpers here fold all three into `None` so that every caller
//! applies the same rule.

use serde_json::Value;

/// Namespace prefixed onto identifiers that do not carry one.
pub const DEFAULT_NAMESPACE: &str = "pixelmon";

/// Separator between a namespace and the identifier path.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Form name used when a form is unnamed or blank.
pub const BASE_FORM_NAME: &str = "base";

/// Qualify an identifier with [`DEFAULT_NAMESPACE`] unless it already has one.
///
/// Surrounding whitespace is trimmed first. An empty identifier still gets
/// the prefix.
///
/// # Examples
///
/// ```
/// use dexmorph_core::normalize::ensure_namespace;
///
/// assert_eq!(ensure_namespace("foo"), "pixelmon:foo");
/// assert_eq!(ensure_namespace(" minecraft:step "), "minecraft:step");
/// ```
pub fn ensure_namespace(id: &str) -> String {
    let id = id.trim();
    if id.contains(NAMESPACE_SEPARATOR) {
        id.to_string()
    } else {
        format!("{DEFAULT_NAMESPACE}{NAMESPACE_SEPARATOR}{id}")
    }
}

/// Returns the value unless it is missing, `null`, or a blank string.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => Some(other),
    }
}

/// Returns `true` for values that carry content.
///
/// `null`, `false`, zero, and empty strings, arrays, and objects are all
/// treated as "no value". A blank but non-empty string still counts.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Returns the string content of a present, non-blank string value.
///
/// Non-string values yield `None`.
pub fn present_str(value: Option<&Value>) -> Option<&str> {
    present(value).and_then(Value::as_str)
}

/// Render a scalar as text the way it would appear in a sound list.
///
/// `null` has no textual form and yields `None`; containers are rendered as
/// compact JSON.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Normalize a form name, defaulting to [`BASE_FORM_NAME`].
///
/// Missing, `null`, and blank names become `"base"`. Any other value is
/// returned unchanged; no trimming or case folding is applied.
pub fn normalize_form_name(name: Option<&Value>) -> Value {
    match present(name) {
        Some(name) => name.clone(),
        None => Value::String(BASE_FORM_NAME.to_string()),
    }
}
