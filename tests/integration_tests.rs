use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_optimize_help() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["optimize", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--level"))
        .stdout(predicate::str::contains("--exif"));
}

#[test]
fn test_list_help() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["list", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_optimize_missing_args() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["optimize"]);
    cmd.assert().failure();
}

#[test]
fn test_optimize_level_out_of_range() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["optimize", "photo.jpg", "--level", "101"]);
    cmd.assert().failure();
}

#[test]
fn test_optimize_nonexistent_file() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["optimize", "nonexistent.jpg"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Image incorrect!"))
        .stdout(predicate::str::contains("\"success\": false"));
}

#[test]
fn test_optimize_directory() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["optimize", &temp_dir.path().to_string_lossy()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Image incorrect!"));
}

#[test]
fn test_optimize_unreachable_endpoint() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.jpg");
    let mut file = File::create(&test_file).unwrap();
    file.write_all(b"fake image data").unwrap();

    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["--endpoint", "http://127.0.0.1:9", "--timeout", "5"]);
    cmd.args(["optimize", &test_file.to_string_lossy()]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Unknown error occurred"));
}

#[test]
fn test_check_unreachable_endpoint_quiet() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["--endpoint", "http://127.0.0.1:9", "--timeout", "5", "-q", "check"]);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Unknown error occurred"));
}

#[test]
fn test_delete_accepts_negative_id() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["--endpoint", "http://127.0.0.1:9", "--timeout", "5"]);
    cmd.args(["delete", "--id", "-1"]);
    // Parsing succeeds; the request itself fails against the closed port.
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Unknown error occurred"));
}

#[test]
fn test_zero_timeout_rejected() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["--timeout", "0", "check"]);
    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--timeout"));
}

#[test]
fn test_quiet_keeps_stdout_pure_json() {
    let mut cmd = Command::cargo_bin("images-compressor").unwrap();
    cmd.args(["-q", "optimize", "nonexistent.jpg"]);
    let output = cmd.output().unwrap();

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["message"], "Image incorrect!");
    assert!(output.stderr.is_empty());
}
