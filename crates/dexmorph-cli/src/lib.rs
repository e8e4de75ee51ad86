//! CLI logic for the Dexmorph species converter.
//!
//! This module contains the core CLI logic: picking the input mode, running
//! documents through the [`Converter`], and writing the results.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, STDIN};

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info};
use tempfile::NamedTempFile;

use dexmorph::{ConversionError, Converter};

/// Run the Dexmorph CLI application
///
/// The input decides the mode:
/// - `-` reads one document from stdin and writes it to stdout, or to
///   `--output` when given
/// - a directory converts every matching file in it (not recursively),
///   writing next to the inputs or into the `--output` directory
/// - anything else is a single file, written next to the input or to
///   `--output`
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ConversionError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed or structurally incompatible documents
/// - Any failed file in a directory, after the rest were converted
pub fn run(args: &Args) -> Result<(), ConversionError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing input"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let converter = Converter::new(app_config);
    let output = args.output.as_deref().map(Path::new);

    if args.input == STDIN {
        return convert_stdin(&converter, output);
    }

    let input = Path::new(&args.input);
    if input.is_dir() {
        convert_directory(&converter, input, output)
    } else {
        convert_file(&converter, input, output)
    }
}

fn convert_stdin(converter: &Converter, output: Option<&Path>) -> Result<(), ConversionError> {
    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;

    let converted = converter.convert_text(&source)?;

    match output {
        Some(path) => {
            write_atomic(path, &converted)?;
            info!(output_file = path.display().to_string(); "Document converted");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{converted}")?;
        }
    }
    Ok(())
}

fn convert_file(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), ConversionError> {
    let name = file_name(input);
    let source = fs::read_to_string(input)?;

    let converted = converter.convert_source(&source, &name)?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => input.with_file_name(converter.output_name(&name)),
    };
    write_atomic(&output, &converted)?;

    info!(output_file = output.display().to_string(); "Document converted");
    Ok(())
}

fn convert_directory(
    converter: &Converter,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), ConversionError> {
    let out_dir = output.unwrap_or(input);
    fs::create_dir_all(out_dir)?;

    let mut paths: Vec<PathBuf> = fs::read_dir(input)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|path| path.is_file() && converter.should_convert(&file_name(path)));
    // Directory order is platform dependent.
    paths.sort();

    if paths.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "no .{} files to convert in {}",
                converter.config().batch().extension(),
                input.display()
            ),
        )
        .into());
    }

    let mut read_failures = 0;
    let mut sources = Vec::with_capacity(paths.len());
    for path in &paths {
        match fs::read_to_string(path) {
            Ok(source) => sources.push((file_name(path), source)),
            Err(err) => {
                error!(file_name = path.display().to_string(), err:err; "Failed to read input");
                read_failures += 1;
            }
        }
    }

    let report = converter.convert_batch(sources);
    for entry in report.entries() {
        match (entry.converted(), entry.output(), entry.error()) {
            (Some(converted), Some(text), _) => {
                let path = out_dir.join(converted);
                write_atomic(&path, text)?;
                debug!(output_file = path.display().to_string(); "Document written");
            }
            (_, _, Some(err)) => {
                for report in error_adapter::render_reports(err) {
                    error!("{report}");
                }
            }
            _ => {}
        }
    }

    let summary = report.summary();
    info!(
        converted = summary.converted(),
        failed = summary.failed() + read_failures;
        "Directory converted"
    );

    if summary.failed() + read_failures > 0 {
        return Err(ConversionError::Batch {
            failed: summary.failed() + read_failures,
            total: summary.total() + read_failures,
        });
    }
    Ok(())
}

/// Write `contents` to `path` through a temporary file in the same directory.
fn write_atomic(path: &Path, contents: &str) -> Result<(), ConversionError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path).map_err(|err| err.error)?;
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
