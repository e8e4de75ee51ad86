//! Error types for Dexmorph operations.
//!
//! This module provides the main error type [`ConversionError`] which wraps
//! the error conditions of converting one document, together with the name
//! of the document that failed.

use std::{fmt, io};

use thiserror::Error;

use dexmorph_parser::error::ParseError;

/// Where a converted document came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceName {
    /// Text passed directly to [`convert_text`](crate::convert_text).
    Text,
    /// An already parsed document.
    Document,
    /// A named file.
    File(String),
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceName::Text => write!(f, "text input"),
            SourceName::Document => write!(f, "document"),
            SourceName::File(name) => write!(f, "JSON file '{name}'"),
        }
    }
}

/// The main error type for Dexmorph operations.
///
/// # Diagnostic Variants
///
/// `Parse` keeps the source text so its byte spans can be rendered as
/// snippets. `Shape` errors point into the document by path instead.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Error converting {source_name}: {err}")]
    Parse {
        err: ParseError,
        src: String,
        source_name: SourceName,
    },

    #[error("Error converting {source_name}: {err}")]
    Shape {
        err: ParseError,
        source_name: SourceName,
    },

    #[error("Error converting {source_name}: failed to serialize result: {err}")]
    Serialize {
        err: serde_json::Error,
        source_name: SourceName,
    },

    #[error("{failed} of {total} documents failed to convert")]
    Batch { failed: usize, total: usize },
}

impl ConversionError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(
        err: ParseError,
        src: impl Into<String>,
        source_name: SourceName,
    ) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            source_name,
        }
    }

    /// Get the name of the document that failed, if this error concerns one.
    pub fn source_name(&self) -> Option<&SourceName> {
        match self {
            Self::Parse { source_name, .. }
            | Self::Shape { source_name, .. }
            | Self::Serialize { source_name, .. } => Some(source_name),
            Self::Io(_) | Self::Batch { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use dexmorph_parser::error::{Diagnostic, ErrorCode};

    use super::*;

    #[test]
    fn test_source_name_display() {
        assert_eq!(SourceName::Text.to_string(), "text input");
        assert_eq!(
            SourceName::File("eevee.json".to_string()).to_string(),
            "JSON file 'eevee.json'"
        );
    }

    #[test]
    fn test_parse_error_display_names_file() {
        let err = ConversionError::new_parse_error(
            Diagnostic::error("expected value")
                .with_code(ErrorCode::E001)
                .into(),
            "{",
            SourceName::File("eevee.json".to_string()),
        );

        assert_eq!(
            err.to_string(),
            "Error converting JSON file 'eevee.json': error[E001]: expected value"
        );
        assert_eq!(
            err.source_name(),
            Some(&SourceName::File("eevee.json".to_string()))
        );
    }

    #[test]
    fn test_batch_error_display() {
        let err = ConversionError::Batch {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 documents failed to convert");
        assert!(err.source_name().is_none());
    }
}
