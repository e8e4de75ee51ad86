//! Batch conversion results and output naming.
//!
//! Each document in a batch converts on its own: a failure is recorded in
//! that document's [`BatchEntry`] and never stops its siblings.

use crate::{config::AppConfig, error::ConversionError};

/// Name the output of `input`: the suffix goes between stem and extension.
///
/// # Examples
///
/// ```
/// use dexmorph::batch::output_name;
///
/// assert_eq!(output_name("eevee.json", "_new", "json"), "eevee_new.json");
/// assert_eq!(output_name("eevee", "_new", "json"), "eevee_new.json");
/// ```
pub fn output_name(input: &str, suffix: &str, extension: &str) -> String {
    let stem = input
        .strip_suffix(extension)
        .and_then(|stem| stem.strip_suffix('.'))
        .unwrap_or(input);
    format!("{stem}{suffix}.{extension}")
}

/// Returns `true` if a batch should convert the input called `name`.
///
/// Inputs must carry the configured extension. When skipping is enabled,
/// names that already end in the output suffix are left alone.
pub fn should_convert(name: &str, config: &AppConfig) -> bool {
    let extension = config.batch().extension();
    let Some(stem) = name
        .strip_suffix(extension)
        .and_then(|stem| stem.strip_suffix('.'))
    else {
        return false;
    };
    !(config.batch().skip_converted() && stem.ends_with(config.output().suffix()))
}

/// The outcome of converting one document in a batch.
#[derive(Debug)]
pub struct BatchEntry {
    original: String,
    output_name: String,
    result: Result<String, ConversionError>,
}

impl BatchEntry {
    pub(crate) fn new(
        original: impl Into<String>,
        output_name: impl Into<String>,
        result: Result<String, ConversionError>,
    ) -> Self {
        Self {
            original: original.into(),
            output_name: output_name.into(),
            result,
        }
    }

    /// Get the input name.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the output name, if the document converted.
    pub fn converted(&self) -> Option<&str> {
        self.result.as_ref().ok().map(|_| self.output_name.as_str())
    }

    /// Get the converted text, if the document converted.
    pub fn output(&self) -> Option<&str> {
        self.result.as_deref().ok()
    }

    /// Get the error, if the document failed.
    pub fn error(&self) -> Option<&ConversionError> {
        self.result.as_ref().err()
    }

    /// Returns `true` if the document converted.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Counts of converted and failed documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    converted: usize,
    failed: usize,
}

impl BatchSummary {
    /// Get the number of converted documents.
    pub fn converted(&self) -> usize {
        self.converted
    }

    /// Get the number of failed documents.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Get the number of documents attempted.
    pub fn total(&self) -> usize {
        self.converted + self.failed
    }

    /// Turn any failure into a [`ConversionError::Batch`].
    pub fn ensure_success(self) -> Result<Self, ConversionError> {
        if self.failed == 0 {
            Ok(self)
        } else {
            Err(ConversionError::Batch {
                failed: self.failed,
                total: self.total(),
            })
        }
    }
}

/// All entries of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    entries: Vec<BatchEntry>,
}

impl BatchReport {
    pub(crate) fn new(entries: Vec<BatchEntry>) -> Self {
        Self { entries }
    }

    /// Borrow the entries.
    pub fn entries(&self) -> &[BatchEntry] {
        &self.entries
    }

    /// Consume the report, returning its entries.
    pub fn into_entries(self) -> Vec<BatchEntry> {
        self.entries
    }

    /// Returns `true` if no document was attempted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count successes and failures.
    pub fn summary(&self) -> BatchSummary {
        let converted = self.entries.iter().filter(|e| e.is_success()).count();
        BatchSummary {
            converted,
            failed: self.entries.len() - converted,
        }
    }
}
