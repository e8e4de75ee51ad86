use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tempfile::tempdir;

use dexmorph::ConversionError;
use dexmorph_cli::{Args, run};

/// Samples are at workspace root, relative to workspace not the crate
fn samples_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("samples")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(input: &Path, output: Option<&Path>) -> Args {
    Args {
        input: input.to_string_lossy().to_string(),
        output: output.map(|path| path.to_string_lossy().to_string()),
        config: None,
        log_level: "off".to_string(),
    }
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("Output should exist");
    serde_json::from_str(&text).expect("Output should be JSON")
}

#[test]
fn e2e_smoke_test_valid_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let valid_samples = collect_json_files(samples_dir());

    assert!(!valid_samples.is_empty(), "No valid samples found in samples/");

    let mut failed_samples = Vec::new();

    for sample_path in &valid_samples {
        let output_path = temp_dir
            .path()
            .join(sample_path.file_name().unwrap());

        match run(&args(sample_path, Some(&output_path))) {
            Ok(()) => {
                let document = read_json(&output_path);
                let forms = document["forms"].as_array().expect("forms array");
                for form in forms {
                    let last = form.as_object().unwrap().keys().last().cloned();
                    assert_eq!(last.as_deref(), Some("growth_data"));
                }
            }
            Err(e) => failed_samples.push((sample_path.clone(), e)),
        }
    }

    if !failed_samples.is_empty() {
        eprintln!("\nValid samples that failed:");
        for (path, err) in &failed_samples {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!(
            "{} valid sample(s) failed unexpectedly",
            failed_samples.len()
        );
    }

    println!("✅ All {} valid samples passed", valid_samples.len());
}

#[test]
fn e2e_smoke_test_error_samples() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_samples = collect_json_files(samples_dir().join("errors"));

    assert!(
        !error_samples.is_empty(),
        "No error samples found in samples/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for sample_path in &error_samples {
        let output_filename = format!(
            "error_{}",
            sample_path.file_name().unwrap().to_string_lossy()
        );
        let output_path = temp_dir.path().join(output_filename);

        match run(&args(sample_path, Some(&output_path))) {
            Ok(()) => unexpectedly_succeeded.push(sample_path.clone()),
            Err(err) => {
                let name = sample_path.file_name().unwrap().to_string_lossy();
                assert!(
                    err.to_string().contains(&format!("JSON file '{name}'")),
                    "Error should name the file: {err}"
                );
                assert!(!output_path.exists(), "Failed input left an output behind");
            }
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError samples that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error sample(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error samples failed as expected",
        error_samples.len()
    );
}

#[test]
fn e2e_default_output_is_next_to_input() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("eevee.json");
    fs::copy(samples_dir().join("eevee.json"), &input).unwrap();

    run(&args(&input, None)).expect("Conversion should succeed");

    let document = read_json(&temp_dir.path().join("eevee_new.json"));
    assert_eq!(document["name"], "Eevee");
    assert_eq!(document["defaultForms"][0], "base");
    assert_eq!(
        document["forms"][0]["genderProperties"][0]["palettes"][0]["models"][0]["models"][0]
            ["model"],
        "a/b/model.bmd"
    );
}

#[test]
fn e2e_directory_converts_each_file() {
    let input_dir = tempdir().expect("Failed to create temp directory");
    for sample in collect_json_files(samples_dir()) {
        fs::copy(&sample, input_dir.path().join(sample.file_name().unwrap())).unwrap();
    }
    fs::write(input_dir.path().join("notes.txt"), "not a species").unwrap();

    run(&args(input_dir.path(), None)).expect("Directory conversion should succeed");

    let vulpix = read_json(&input_dir.path().join("vulpix_new.json"));
    let palettes = &vulpix["forms"][0]["genderProperties"][0]["palettes"];
    assert_eq!(
        palettes[1]["models"][0]["models"][0]["model"],
        "pokemon/vulpix/model.bmd"
    );
    assert_eq!(
        palettes[1]["models"][0]["models"][0]["texture"],
        "pokemon/vulpix/shiny.png"
    );
    assert!(!input_dir.path().join("notes_new.json").exists());

    // A second run skips the outputs of the first.
    run(&args(input_dir.path(), None)).expect("Rerun should succeed");
    assert!(!input_dir.path().join("vulpix_new_new.json").exists());
}

#[test]
fn e2e_directory_isolates_failures() {
    let input_dir = tempdir().expect("Failed to create temp directory");
    let output_dir = input_dir.path().join("out");
    fs::copy(
        samples_dir().join("eevee.json"),
        input_dir.path().join("eevee.json"),
    )
    .unwrap();
    fs::copy(
        samples_dir().join("errors").join("truncated.json"),
        input_dir.path().join("truncated.json"),
    )
    .unwrap();

    let err = run(&args(input_dir.path(), Some(&output_dir))).unwrap_err();

    assert!(matches!(
        err,
        ConversionError::Batch {
            failed: 1,
            total: 2
        }
    ));
    assert!(output_dir.join("eevee_new.json").exists());
    assert!(!output_dir.join("truncated_new.json").exists());
}

#[test]
fn e2e_empty_directory_is_error() {
    let input_dir = tempdir().expect("Failed to create temp directory");

    let err = run(&args(input_dir.path(), None)).unwrap_err();

    assert!(matches!(err, ConversionError::Io(_)));
}

#[test]
fn e2e_config_file_controls_output() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let input = temp_dir.path().join("pidgey.json");
    fs::copy(samples_dir().join("pidgey.json"), &input).unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[output]\nindent = 4\nsuffix = \"_v2\"\n").unwrap();

    let mut args = args(&input, None);
    args.config = Some(config.to_string_lossy().to_string());
    run(&args).expect("Conversion should succeed");

    let text = fs::read_to_string(temp_dir.path().join("pidgey_v2.json")).unwrap();
    assert!(text.starts_with("{\n    \"name\": \"Pidgey\""));
}
