//! Collector for accumulating diagnostics during the shape check.
//!
//! The [`DiagnosticCollector`] lets the shape check report every malformed
//! value in a document instead of stopping at the first one.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during a processing phase.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return `value` if no diagnostic was emitted.
    pub fn finish<T>(self, value: T) -> Result<T, ParseError> {
        if !self.diagnostics.is_empty() {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, json_path::JsonPath};

    #[test]
    fn test_collector_new_finish_ok() {
        let collector = DiagnosticCollector::new();
        assert_eq!(collector.finish(7).unwrap(), 7);
    }

    #[test]
    fn test_collector_emit_finish_err() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(Diagnostic::error("forms must be an array"));

        assert!(collector.finish(()).is_err());
    }

    #[test]
    fn test_collector_keeps_every_diagnostic() {
        let mut collector = DiagnosticCollector::new();

        collector.emit(
            Diagnostic::error("form is not an object")
                .with_code(ErrorCode::E202)
                .with_path(JsonPath::root().key("forms").index(0)),
        );
        collector.emit(Diagnostic::error("form is not an object").with_code(ErrorCode::E202));

        let err = collector.finish(()).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E202));
    }
}
