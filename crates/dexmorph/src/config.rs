//! Configuration types for Dexmorph conversion runs.
//!
//! This module provides configuration structures that control how converted
//! documents are written and how batches pick their inputs. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! The conversion rules themselves are fixed by the target schema and are
//! not configurable.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining output and batch settings.
//! - [`OutputConfig`] - Indentation and output file naming.
//! - [`BatchConfig`] - Which files a directory conversion picks up.
//!
//! # Example
//!
//! ```
//! # use dexmorph::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.output().indent(), 2);
//! assert_eq!(config.output().suffix(), "_new");
//! ```

use serde::Deserialize;

/// Top-level configuration combining output and batch settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,

    /// Batch configuration section.
    #[serde(default)]
    batch: BatchConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `output` - Output formatting and naming.
    /// * `batch` - Batch input selection.
    pub fn new(output: OutputConfig, batch: BatchConfig) -> Self {
        Self { output, batch }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the batch configuration.
    pub fn batch(&self) -> &BatchConfig {
        &self.batch
    }
}

/// How converted documents are formatted and named.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Spaces per indentation level.
    #[serde(default = "default_indent")]
    indent: usize,

    /// Text appended to an input file's stem to name its output.
    #[serde(default = "default_suffix")]
    suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            suffix: default_suffix(),
        }
    }
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    pub fn new(indent: usize, suffix: impl Into<String>) -> Self {
        Self {
            indent,
            suffix: suffix.into(),
        }
    }

    /// Returns the number of spaces per indentation level.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Returns the output file name suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

/// Which files a batch conversion picks up.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    /// Skip inputs whose names show they are already converted.
    #[serde(default = "default_skip_converted")]
    skip_converted: bool,

    /// File extension of convertible inputs, without the dot.
    #[serde(default = "default_extension")]
    extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            skip_converted: default_skip_converted(),
            extension: default_extension(),
        }
    }
}

impl BatchConfig {
    /// Creates a new [`BatchConfig`].
    pub fn new(skip_converted: bool, extension: impl Into<String>) -> Self {
        Self {
            skip_converted,
            extension: extension.into(),
        }
    }

    /// Returns `true` if already converted inputs are skipped.
    pub fn skip_converted(&self) -> bool {
        self.skip_converted
    }

    /// Returns the input file extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

fn default_indent() -> usize {
    2
}

fn default_suffix() -> String {
    "_new".to_string()
}

fn default_skip_converted() -> bool {
    true
}

fn default_extension() -> String {
    "json".to_string()
}
