//! The core diagnostic type for the Dexmorph error system.
//!
//! A [`Diagnostic`] represents a single conversion-blocking error with optional
//! error code, labeled source spans, a document path, and help text.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    json_path::JsonPath,
    span::Span,
};

/// A rich diagnostic message with location information.
///
/// Diagnostics include:
/// - An optional error code for documentation and searchability
/// - A primary message describing the issue
/// - Labeled byte spans, for errors found while reading the text
/// - A document path, for errors found while checking its structure
/// - Optional help text with suggestions
///
/// # Example
///
/// ```text
/// error[E203]: `palettes` must be an array, found an object (at $.forms[0].genderProperties[0].palettes)
///   = help: list the palettes as `[{...}, {...}]`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    path: Option<JsonPath>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use dexmorph_parser::error::{Diagnostic, ErrorCode};
    /// # use dexmorph_parser::Span;
    ///
    /// let diag = Diagnostic::error("EOF while parsing an object")
    ///     .with_code(ErrorCode::E002)
    ///     .with_label(Span::new(10..10), "input ends here")
    ///     .with_help("close every `{` and `[`");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            path: None,
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the document path, if any.
    pub fn path(&self) -> Option<&JsonPath> {
        self.path.as_ref()
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Set the document path of the offending value.
    pub fn with_path(mut self, path: JsonPath) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (at {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}
