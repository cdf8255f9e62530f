//! Integration tests for the rasid binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn rasid() -> Command {
    Command::cargo_bin("rasid").unwrap()
}

fn write_transcript(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".txt")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const RECEIPT: &str = "Swiggy\n\
    paneer tikka Rs. 240.00\n\
    butter naan Rs. 90.00\n\
    dal makhani Rs. 210.00\n\
    Grand Total: Rs. 540.00\n";

#[test]
fn test_help_lists_subcommands() {
    rasid()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("process"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_process_emits_json_record() {
    let file = write_transcript(RECEIPT);

    let output = rasid()
        .arg("process")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["category"], "Food");
    assert_eq!(record["amount"], 540.0);
    assert!(record["categoryConfidence"].as_f64().unwrap() >= 0.55);
    assert!(record["analyzedAt"].is_string());
}

#[test]
fn test_process_reads_stdin() {
    rasid()
        .arg("process")
        .arg("-")
        .write_stdin(RECEIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"amount\":540.0"));
}

#[test]
fn test_process_text_format() {
    let file = write_transcript(RECEIPT);

    rasid()
        .arg("process")
        .arg(file.path())
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Food"))
        .stdout(predicate::str::contains("Rs. 540.00"));
}

#[test]
fn test_process_missing_file_fails() {
    rasid()
        .arg("process")
        .arg("no-such-transcript.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_batch_writes_summary() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a.txt"), RECEIPT).unwrap();
    std::fs::write(dir.path().join("b.txt"), "PNR: 24681357\n").unwrap();

    let out_dir = tempfile::tempdir().unwrap();

    rasid()
        .arg("batch")
        .arg(format!("{}/*.txt", dir.path().display()))
        .args(["--output-dir"])
        .arg(out_dir.path())
        .arg("--summary")
        .assert()
        .success();

    let summary = std::fs::read_to_string(out_dir.path().join("summary.csv")).unwrap();
    assert!(summary.contains("a.txt"));
    assert!(summary.contains("Food"));
    assert!(summary.contains("b.txt"));
}

#[test]
fn test_config_show_prints_defaults() {
    rasid()
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("confidence_floor"));
}
