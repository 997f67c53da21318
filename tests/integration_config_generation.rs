//! Integration tests for config validation and generation
//!
//! These tests build configurations against real files in a temporary
//! directory and check the config file the parser will read.

use parser_launcher::{EndOfLine, Field, LauncherError, ParserConfiguration, ViolationKind};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Source CSV and destination directory inside a fresh temp dir
fn workspace() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("ODP_208_1262B_3D.csv");
    fs::write(&input, "0.1234,0.5678\n0.9012,0.3456\n").expect("Failed to write input");
    let output = dir.path().join("tiles");
    fs::create_dir(&output).expect("Failed to create output dir");
    (dir, input, output)
}

/// Reference scenario: 5..8 byte fields, 1000x1000 tiles, automatic EOL
///
/// Purpose: Validate the complete validate → generate path with a typical setup
/// Benefit: Pins down the exact file contents the parser receives
#[test]
fn test_reference_scenario() {
    let (dir, input, output) = workspace();
    let config = ParserConfiguration::new(&input, &output)
        .with_input_field(Field::new(5, 8))
        .with_output_field(Field::new(5, 8))
        .with_tile_size(1000, 1000)
        .with_end_of_line(EndOfLine::Auto);

    assert!(!config.validate().is_invalid());

    let destination = dir.path().join("ODP_BIS.toml");
    config
        .generate_config_file(&destination, true)
        .expect("Config generation should succeed");

    let written = fs::read_to_string(&destination).unwrap();
    let expected = format!(
        "min_field_size = 5\n\
         max_field_size = 8\n\
         output_field_size = 8\n\
         eol_flag = a\n\
         tile_width = 1000\n\
         tile_height = 1000\n\
         source = \"{}\"\n\
         dest = \"{}\"\n",
        input.display(),
        output.display()
    );
    assert_eq!(written, expected);
    assert!(written.contains("eol_flag = a"));
    assert!(written.contains("output_field_size = 8"));
}

/// Output directory that does not exist yet is accepted
///
/// Purpose: The parser creates its destination, so only the parent must exist
/// Benefit: Users can point at a fresh directory name
#[test]
fn test_output_directory_created_later() {
    let (dir, input, _) = workspace();
    let config = ParserConfiguration::new(&input, dir.path().join("not-yet"));
    assert!(!config.validate().is_invalid());

    let destination = dir.path().join("parser.toml");
    config.generate_config_file(&destination, false).unwrap();
    assert!(!dir.path().join("not-yet").exists());
}

/// Several problems at once are all reported
///
/// Purpose: Validation never stops at the first failure
/// Benefit: Users fix every problem in one round trip
#[test]
fn test_every_problem_reported() {
    let dir = TempDir::new().unwrap();
    let config = ParserConfiguration::new(dir.path(), dir.path().join("a").join("b"))
        .with_input_field(Field::new(0, 40000))
        .with_output_field(Field::new(8, 5))
        .with_tile_size(-1, i64::from(i32::MAX) + 1);

    let report = config.validate();
    let violations = report.violations();
    assert_eq!(violations.len(), 7);
    assert_eq!(
        violations
            .iter()
            .filter(|v| v.kind() == ViolationKind::Bounds)
            .count(),
        4
    );
    assert_eq!(
        violations
            .iter()
            .filter(|v| v.kind() == ViolationKind::Path)
            .count(),
        2
    );

    let destination = dir.path().join("parser.toml");
    match config.generate_config_file(&destination, true) {
        Err(LauncherError::InvalidConfiguration { violations }) => assert_eq!(violations.len(), 7),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(!destination.exists());
}

/// Overwrite policy keeps or replaces an existing config file
///
/// Purpose: An existing file is only replaced when explicitly allowed
/// Benefit: Prevents clobbering a hand-written parser config
#[test]
fn test_overwrite_policy() {
    let (dir, input, output) = workspace();
    let config = ParserConfiguration::new(&input, &output).with_end_of_line(EndOfLine::Dos);
    let destination = dir.path().join("parser.toml");
    fs::write(&destination, "tile_width = 1\n").unwrap();

    let result = config.generate_config_file(&destination, false);
    assert!(matches!(result, Err(LauncherError::DestinationExists { .. })));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "tile_width = 1\n");

    config.generate_config_file(&destination, true).unwrap();
    let written = fs::read_to_string(&destination).unwrap();
    let keys: Vec<&str> = written
        .lines()
        .map(|line| line.split(" = ").next().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec![
            "min_field_size",
            "max_field_size",
            "output_field_size",
            "eol_flag",
            "tile_width",
            "tile_height",
            "source",
            "dest",
        ]
    );
    assert!(written.contains("eol_flag = d\n"));
}

/// The binary writes the config and stops when asked for a dry run
///
/// Purpose: Exercise argument parsing, logging setup and generation together
/// Benefit: Catches wiring mistakes between the CLI and the library
#[test]
fn test_cli_dry_run() {
    let (dir, input, output) = workspace();
    let destination = dir.path().join("cli.toml");

    let result = Command::new(env!("CARGO_BIN_EXE_parser-launcher"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&destination)
        .args(["--tile-width", "512", "--eol", "unix", "--dry-run"])
        .output()
        .expect("Failed to run parser-launcher");

    assert!(result.status.success(), "{result:?}");
    let written = fs::read_to_string(&destination).unwrap();
    assert!(written.contains("tile_width = 512\n"));
    assert!(written.contains("eol_flag = u\n"));
    assert!(written.contains("min_field_size = 5\n"));
    assert!(written.contains("max_field_size = 7\n"));
}

/// Invalid arguments fail before anything is written
///
/// Purpose: Validation diagnostics reach the user and the exit status is non-zero
/// Benefit: Scripts can rely on the exit status
#[test]
fn test_cli_invalid_configuration() {
    let (dir, input, output) = workspace();
    let destination = dir.path().join("cli.toml");

    let result = Command::new(env!("CARGO_BIN_EXE_parser-launcher"))
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--config")
        .arg(&destination)
        .args(["--min-field-size", "9", "--max-field-size", "8", "--dry-run"])
        .output()
        .expect("Failed to run parser-launcher");

    assert!(!result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("input field minimum size must be smaller than the maximum size"));
    assert!(stdout.contains("Invalid configuration."));
    assert!(!destination.exists());
}

/// Temporary configs only survive a successful generation
///
/// Purpose: An invalid run without `--config` must not leave a
/// `parser-*.toml` behind, a valid one keeps exactly one
/// Benefit: Repeated failed runs do not litter the temp directory
#[test]
fn test_cli_temporary_config_cleanup() {
    let (dir, input, output) = workspace();
    let temp_root = dir.path().join("tmp");
    fs::create_dir(&temp_root).unwrap();

    let launcher = |input: &PathBuf| {
        Command::new(env!("CARGO_BIN_EXE_parser-launcher"))
            .env("TMPDIR", &temp_root)
            .env("TMP", &temp_root)
            .env("TEMP", &temp_root)
            .arg("--input")
            .arg(input)
            .arg("--output")
            .arg(&output)
            .arg("--dry-run")
            .output()
            .expect("Failed to run parser-launcher")
    };

    let failed = launcher(&dir.path().join("missing.csv"));
    assert!(!failed.status.success());
    assert_eq!(fs::read_dir(&temp_root).unwrap().count(), 0);

    let written = launcher(&input);
    assert!(written.status.success(), "{written:?}");
    let kept: Vec<PathBuf> = fs::read_dir(&temp_root)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(kept.len(), 1);
    let name = kept[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("parser-") && name.ends_with(".toml"), "{name}");
    assert!(fs::read_to_string(&kept[0]).unwrap().starts_with("min_field_size = 5"));
}
