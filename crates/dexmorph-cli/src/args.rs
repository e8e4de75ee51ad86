//! Command-line argument definitions for the Dexmorph CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Input path that reads the document from standard input.
pub const STDIN: &str = "-";

/// Command-line arguments for the Dexmorph species converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to a legacy species file, a directory of them, or `-` for stdin
    #[arg(help = "Path to the input file or directory, or - for stdin")]
    pub input: String,

    /// Output file (or directory in batch mode); defaults to next to the input
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
