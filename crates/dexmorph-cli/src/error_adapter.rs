//! Error adapter for converting ConversionError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`dexmorph_parser::error::ParseError`] contains multiple diagnostics,
//! each diagnostic is rendered independently. Syntax diagnostics carry byte
//! spans into the source text; shape diagnostics carry a document path
//! instead and are rendered without a snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use dexmorph::{ConversionError, SourceName};
use dexmorph_parser::error::Diagnostic;

/// Adapter for a single dexmorph diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source text for displaying snippets, when the spans point into it
    src: Option<&'a str>,
    /// Which document the diagnostic belongs to
    source_name: &'a SourceName,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: Option<&'a str>, source_name: &'a SourceName) -> Self {
        Self {
            diag,
            src,
            source_name,
        }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .field("source_name", &self.source_name)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error converting {}: {}",
            self.source_name,
            self.diag.message()
        )?;
        if let Some(path) = self.diag.path() {
            write!(f, " (at {path})")?;
        }
        Ok(())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.src
            .as_ref()
            .map(|src| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() || self.src.is_none() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            LabeledSpan::new_primary_with_span(Some(label.message().to_string()), span)
        })))
    }
}

/// Adapter for non-diagnostic [`ConversionError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, serialization errors, and batch summaries.
pub struct ErrorAdapter<'a>(pub &'a ConversionError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ConversionError::Io(_) => "dexmorph::io",
            ConversionError::Parse { .. } | ConversionError::Shape { .. } => return None,
            ConversionError::Serialize { .. } => "dexmorph::serialize",
            ConversionError::Batch { .. } => "dexmorph::batch",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ConversionError::Batch { .. } => Some(Box::new(
                "each failed file was reported above; the other files were converted",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic from reading the document.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a dexmorph [`Span`](dexmorph_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: dexmorph_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`ConversionError`] into a list of reportable errors.
///
/// For [`ConversionError::Parse`] and [`ConversionError::Shape`], this
/// returns one [`Reportable`] for each diagnostic in the error. For other
/// error variants, this returns a single [`Reportable`].
pub fn to_reportables(err: &ConversionError) -> Vec<Reportable<'_>> {
    match err {
        ConversionError::Parse {
            err: parse_err,
            src,
            source_name,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| {
                Reportable::Diagnostic(DiagnosticAdapter::new(d, Some(src.as_str()), source_name))
            })
            .collect(),
        ConversionError::Shape {
            err: parse_err,
            source_name,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, None, source_name)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render `err` as one miette report per diagnostic.
pub fn render_reports(err: &ConversionError) -> Vec<String> {
    let reporter = miette::GraphicalReportHandler::new();

    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut writer = String::new();
            if reporter.render_report(&mut writer, reportable).is_err() {
                writer = reportable.to_string();
            }
            writer
        })
        .collect()
}
