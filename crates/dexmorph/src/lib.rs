//! Dexmorph - Converter from the legacy Pixelmon species schema to the current one.
//!
//! Reading, conversion, and serialization of species documents. A legacy
//! document goes in as text or as parsed JSON; the same species comes out in
//! the current schema with a fixed, deterministic key order.

pub mod batch;
pub mod config;
pub mod convert;

mod error;
mod export;

pub use dexmorph_core::{growth, model, normalize, ordering, source};

pub use error::{ConversionError, SourceName};

use log::{debug, info, trace};
use serde_json::Value;

use batch::{BatchEntry, BatchReport};
use config::AppConfig;

/// Builder for converting legacy species documents.
///
/// This provides an API for running documents through the parse, convert,
/// and serialize stages with one configuration.
///
/// # Examples
///
/// ```
/// use dexmorph::{Converter, config::AppConfig};
///
/// let source = r#"{"name": "Eevee", "forms": [{"name": ""}]}"#;
///
/// // With custom config
/// let converter = Converter::new(AppConfig::default());
///
/// // Convert text to text
/// let text = converter.convert_text(source)
///     .expect("Failed to convert");
/// assert!(text.contains("\"defaultForms\": [\n    \"base\"\n  ]"));
///
/// // Or use default config
/// let converter = Converter::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Output formatting and batch selection settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Convert an already parsed legacy document.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Shape`] when a field the conversion walks
    /// into holds the wrong kind of value.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexmorph::Converter;
    /// use serde_json::json;
    ///
    /// let converted = Converter::default()
    ///     .convert_document(&json!({"name": "Eevee"}))
    ///     .expect("Failed to convert");
    /// assert_eq!(converted["defaultForms"], json!(["base"]));
    /// ```
    pub fn convert_document(&self, document: &Value) -> Result<Value, ConversionError> {
        let source = dexmorph_parser::parse_value(document).map_err(|err| {
            ConversionError::Shape {
                err,
                source_name: SourceName::Document,
            }
        })?;

        Ok(convert::convert_document(&source))
    }

    /// Convert legacy source text, reporting errors against `"text input"`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Parse`] for malformed JSON and
    /// [`ConversionError::Shape`] for structurally incompatible documents.
    pub fn convert_text(&self, source: &str) -> Result<String, ConversionError> {
        self.convert_named(source, SourceName::Text)
    }

    /// Convert legacy source text read from the file called `name`.
    ///
    /// This behaves like [`convert_text`](Self::convert_text) but names the
    /// file in every error.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Parse`] for malformed JSON and
    /// [`ConversionError::Shape`] for structurally incompatible documents.
    pub fn convert_source(&self, source: &str, name: &str) -> Result<String, ConversionError> {
        self.convert_named(source, SourceName::File(name.to_string()))
    }

    /// Convert every selected input independently.
    ///
    /// Inputs are `(name, text)` pairs. Names rejected by
    /// [`should_convert`](Self::should_convert) are skipped. One failing
    /// document is recorded in its entry and the rest still convert.
    ///
    /// # Examples
    ///
    /// ```
    /// use dexmorph::Converter;
    ///
    /// let report = Converter::default().convert_batch([
    ///     ("eevee.json", r#"{"name": "Eevee"}"#),
    ///     ("broken.json", "{"),
    ///     ("eevee_new.json", "{}"),
    /// ]);
    ///
    /// assert_eq!(report.entries().len(), 2);
    /// assert_eq!(report.summary().failed(), 1);
    /// ```
    pub fn convert_batch<I, N, T>(&self, inputs: I) -> BatchReport
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let entries: Vec<BatchEntry> = inputs
            .into_iter()
            .filter_map(|(name, source)| {
                let name = name.into();
                if !self.should_convert(&name) {
                    debug!(name; "Skipping input");
                    return None;
                }

                let result = self.convert_source(source.as_ref(), &name);
                if let Err(err) = &result {
                    debug!(name, err:% = err; "Input failed to convert");
                }
                let output_name = self.output_name(&name);
                Some(BatchEntry::new(name, output_name, result))
            })
            .collect();

        let report = BatchReport::new(entries);
        let summary = report.summary();
        info!(
            converted = summary.converted(),
            failed = summary.failed();
            "Batch converted"
        );
        report
    }

    /// Returns `true` if a batch would convert the input called `name`.
    pub fn should_convert(&self, name: &str) -> bool {
        batch::should_convert(name, &self.config)
    }

    /// Name the output for the input called `name`.
    pub fn output_name(&self, name: &str) -> String {
        batch::output_name(
            name,
            self.config.output().suffix(),
            self.config.batch().extension(),
        )
    }

    fn convert_named(
        &self,
        source: &str,
        source_name: SourceName,
    ) -> Result<String, ConversionError> {
        info!(source:% = source_name; "Converting document");

        let value = dexmorph_parser::parse_json(source).map_err(|err| {
            ConversionError::new_parse_error(err, source, source_name.clone())
        })?;
        let document = dexmorph_parser::parse_value(&value).map_err(|err| {
            ConversionError::Shape {
                err,
                source_name: source_name.clone(),
            }
        })?;

        let converted = convert::convert_document(&document);
        trace!(converted:?; "Converted document");

        export::to_json_text(&converted, self.config.output().indent())
            .map_err(|err| ConversionError::Serialize { err, source_name })
    }
}

/// Convert an already parsed legacy document with the default configuration.
///
/// # Errors
///
/// See [`Converter::convert_document`].
pub fn convert_document(document: &Value) -> Result<Value, ConversionError> {
    Converter::default().convert_document(document)
}

/// Convert legacy source text with the default configuration.
///
/// # Errors
///
/// See [`Converter::convert_text`].
pub fn convert_text(source: &str) -> Result<String, ConversionError> {
    Converter::default().convert_text(source)
}
