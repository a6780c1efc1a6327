//! End-to-end tests for `ref-probe generate`

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REFERENCES: &str = ">A\nAAACCCTTT\n>B\nGGGTTTAAA\n";

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

fn generate(input: &Path, output: &Path, ambiguous: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ref-probe").unwrap();
    cmd.arg("generate")
        .arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .arg("-a")
        .arg(ambiguous);
    cmd
}

#[test]
fn test_generate_unique_probes() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");

    generate(&input, &output, &ambiguous)
        .args(["-s", "0", "-e", "100", "--kmin", "3", "--kmax", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("With probe:      2"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "A\tAAC\nB\tGGG\n");
    assert_eq!(fs::read_to_string(&ambiguous).unwrap(), "");
}

#[test]
fn test_generate_default_window_is_empty() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");

    generate(&input, &output, &ambiguous)
        .args(["--kmin", "3", "--kmax", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Truncation window is empty"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
    assert_eq!(fs::read_to_string(&ambiguous).unwrap(), REFERENCES);
}

#[test]
fn test_generate_negative_start_and_long_end() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");

    generate(&input, &output, &ambiguous)
        .args(["-s", "-5", "-e", "1000", "--kmin", "3", "--kmax", "5"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "A\tAAC\nB\tGGG\n");
}

#[test]
fn test_generate_keeps_ambiguous_sequences_untruncated() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "refs.fa",
        ">x first copy\nACGTACGTAA\n>y second copy\nACGTACGTCC\n>z\nTTTTGGGGTT\n",
    );
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");

    // Only the shared first eight bases are searched for x and y
    generate(&input, &output, &ambiguous)
        .args(["-s", "0", "-e", "8", "--kmin", "3", "--kmax", "6"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "z\tGGG\n");
    assert_eq!(
        fs::read_to_string(&ambiguous).unwrap(),
        ">x first copy\nACGTACGTAA\n>y second copy\nACGTACGTCC\n"
    );
}

#[test]
fn test_generate_json_summary() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");

    let assert = generate(&input, &output, &ambiguous)
        .args(["--format", "json", "-s", "0", "-e", "100"])
        .args(["--kmin", "3", "--kmax", "5"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["references"], 2);
    assert_eq!(report["with_probe"], 2);
    assert_eq!(report["ambiguous"], 0);
    assert_eq!(report["kmin"], 3);
}

#[test]
fn test_generate_writes_log_file() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");
    let log = dir.path().join("run.log");

    generate(&input, &output, &ambiguous)
        .arg("--log")
        .arg(&log)
        .args(["-s", "0", "-e", "100", "--kmin", "3", "--kmax", "5"])
        .assert()
        .success();

    let log_text = fs::read_to_string(&log).unwrap();
    assert!(log_text.contains("Program started"));
    assert!(log_text.contains("Found unique probes"));
}

#[test]
fn test_generate_verbose_log_file_has_record_events() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);
    let quiet_log = dir.path().join("quiet.log");
    let verbose_log = dir.path().join("verbose.log");

    generate(&input, &dir.path().join("p1.tsv"), &dir.path().join("a1.fa"))
        .args(["-s", "0", "-e", "100", "--kmin", "3", "--kmax", "5", "--log"])
        .arg(&quiet_log)
        .assert()
        .success();
    generate(&input, &dir.path().join("p2.tsv"), &dir.path().join("a2.fa"))
        .args(["-v", "-s", "0", "-e", "100", "--kmin", "3", "--kmax", "5", "--log"])
        .arg(&verbose_log)
        .assert()
        .success();

    let quiet = fs::read_to_string(&quiet_log).unwrap();
    let verbose = fs::read_to_string(&verbose_log).unwrap();
    assert!(!quiet.contains("Selected unique probe"));
    assert!(verbose.contains("Indexed reference"));
    assert!(verbose.contains("Selected unique probe"));
}

#[test]
fn test_generate_invalid_kmer_range() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", REFERENCES);

    generate(&input, &dir.path().join("p.tsv"), &dir.path().join("a.fa"))
        .args(["--kmin", "10", "--kmax", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid k-mer range"));
}

#[test]
fn test_generate_missing_input() {
    let dir = TempDir::new().unwrap();

    generate(
        &dir.path().join("missing.fa"),
        &dir.path().join("p.tsv"),
        &dir.path().join("a.fa"),
    )
    .assert()
    .failure()
    .stderr(predicate::str::contains("Cannot open input file"));
}

#[test]
fn test_generate_empty_input() {
    let dir = TempDir::new().unwrap();
    let input = write(&dir, "refs.fa", "");
    let output = dir.path().join("probes.tsv");
    let ambiguous = dir.path().join("ambiguous.fa");

    generate(&input, &output, &ambiguous)
        .args(["-s", "0", "-e", "100"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "");
    assert_eq!(fs::read_to_string(&ambiguous).unwrap(), "");
}
