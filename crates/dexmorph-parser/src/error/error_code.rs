//! Error codes for the Dexmorph diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Syntax errors from reading the JSON text
//! - `E2xx` - Shape errors found while checking the document structure

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Errors (E0xx)
    // =========================================================================
    /// Invalid JSON syntax.
    ///
    /// A character was encountered that is not valid JSON at this position.
    E001,

    /// Unexpected end of input.
    ///
    /// The text ended before the JSON value was complete.
    E002,

    /// Invalid data.
    ///
    /// The text is well-formed but holds a value that cannot be represented,
    /// such as a number out of range.
    E003,

    // =========================================================================
    // Shape Errors (E2xx)
    // =========================================================================
    /// Document root is not an object.
    E200,

    /// `forms` is not an array.
    E201,

    /// A form is not an object.
    E202,

    /// `palettes` is not an array.
    E203,

    /// A palette is not an object.
    E204,

    /// A model locator path is not a string.
    E205,

    /// A `texture` or `sprite` hint is not a string.
    ///
    /// Hints are used to derive model paths, so they must be text.
    E206,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            ErrorCode::E206 => "E206",
        }
    }

    /// Returns a short description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid JSON syntax",
            ErrorCode::E002 => "unexpected end of input",
            ErrorCode::E003 => "invalid data",
            ErrorCode::E200 => "document root is not an object",
            ErrorCode::E201 => "forms is not an array",
            ErrorCode::E202 => "form is not an object",
            ErrorCode::E203 => "palettes is not an array",
            ErrorCode::E204 => "palette is not an object",
            ErrorCode::E205 => "model locator path is not a string",
            ErrorCode::E206 => "path hint is not a string",
        }
    }

    /// Returns `true` for codes raised while reading the JSON text.
    pub fn is_syntax(&self) -> bool {
        matches!(self, ErrorCode::E001 | ErrorCode::E002 | ErrorCode::E003)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
