//! End-to-end tests: task files in, rendered packages out.

use std::io::Write;
use std::process::Command;

use packer::{pack_file, pack_reader, Packer, PackerConfig, PackerError};
use packer_test::{SAMPLE_INPUT, SAMPLE_OUTPUT};
use tempfile::NamedTempFile;

fn task_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn items(count: u32) -> String {
    (1..=count)
        .map(|i| format!("({},1.5,€2)", i))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_sample_file() {
    let file = task_file(SAMPLE_INPUT);
    assert_eq!(pack_file(file.path()).unwrap(), SAMPLE_OUTPUT);
}

#[test]
fn test_empty_file_renders_nothing() {
    let file = task_file("");
    assert_eq!(pack_file(file.path()).unwrap(), "");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = pack_file(dir.path().join("missing.txt"));
    assert!(matches!(result, Err(PackerError::FileNotFound { .. })));
}

#[test]
fn test_too_many_items_rejected_by_validation() {
    let input = format!("50 : {}\n", items(16));
    let err = pack_reader(input.as_bytes()).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "Task might have up to 15 things to pack from, given: 16"
    );
}

#[test]
fn test_fifteen_items_accepted() {
    let input = format!("50 : {}\n", items(15));
    let output = pack_reader(input.as_bytes()).unwrap();
    assert_eq!(output, "1,2,3,4,5,6,7,8,9,10,11,12,13,14,15\n");
}

#[test]
fn test_capacity_limit() {
    let err = pack_reader("200 : (1,53.38,€45)\n".as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Max weight that a package can take is ≤ 100.0, given: 200.0"
    );
}

#[test]
fn test_item_weight_limit() {
    let err = pack_reader("81 : (1,153.38,€45)\n".as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Max weight that a thing can have is ≤ 100.0, given: 153.38"
    );
}

#[test]
fn test_item_cost_limit() {
    let err = pack_reader("81 : (1,53.38,€145)\n".as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Max cost that a thing can have is ≤ 100.0, given: 145.0"
    );
}

#[test]
fn test_invalid_line_stops_batch() {
    let input = "81 : (1,53.38,€45)\n81 ; (1,53.38,€45)\n";
    let result = pack_reader(input.as_bytes());
    assert!(matches!(
        result,
        Err(PackerError::IncorrectInput { line: 2, .. })
    ));
}

#[test]
fn test_raised_item_limit_hits_solver_limit() {
    let config = PackerConfig::from_toml_str("[limits]\nmax_item_count = 20\n").unwrap();
    let input = format!("50 : {}\n", items(16));

    let result = Packer::from_config(&config).pack_to_string(input.as_bytes());
    assert!(matches!(
        result,
        Err(PackerError::TooManyItems { max: 15, given: 16 })
    ));
}

#[test]
fn test_single_worker_matches_default() {
    let config = PackerConfig::new().with_thread_count(1);
    let output = Packer::from_config(&config)
        .pack_to_string(SAMPLE_INPUT.as_bytes())
        .unwrap();
    assert_eq!(output, SAMPLE_OUTPUT);
}

#[test]
fn test_cli_prints_packages() {
    let file = task_file(SAMPLE_INPUT);
    let output = Command::new(env!("CARGO_BIN_EXE_packer"))
        .arg(file.path())
        .args(["--threads", "2"])
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), SAMPLE_OUTPUT);
}

#[test]
fn test_cli_reports_errors() {
    let file = task_file("200 : (1,53.38,€45)\n");
    let output = Command::new(env!("CARGO_BIN_EXE_packer"))
        .arg(file.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Max weight that a package can take is ≤ 100.0, given: 200.0"));
}

#[test]
fn test_cli_yaml_config() {
    let file = task_file(SAMPLE_INPUT);
    let mut config = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    config
        .write_all(b"thread_count: 3\nlimits:\n  max_capacity: 50.0\n")
        .unwrap();
    config.flush().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_packer"))
        .arg(file.path())
        .arg("--config")
        .arg(config.path())
        .env("RUST_LOG", "off")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("given: 81.0"));
}
