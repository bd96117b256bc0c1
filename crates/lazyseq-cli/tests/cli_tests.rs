//! End-to-end tests for the `lazyseq` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lazyseq() -> Command {
    let mut cmd = Command::cargo_bin("lazyseq").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("lazyseq.toml");
    fs::write(&path, body).unwrap();
    path
}

// ── seq ───────────────────────────────────────────────────────────────────────

#[test]
fn seq_counts_zero_to_ten() {
    lazyseq()
        .args(["seq", "--start", "0", "--step", "1", "--count", "11"])
        .assert()
        .success()
        .stdout("0 1 2 3 4 5 6 7 8 9 10\n");
}

#[test]
fn seq_counts_down_by_ten() {
    lazyseq()
        .args(["seq", "--start", "100", "--step", "-10", "--count", "21"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("100 90 80 70"))
        .stdout(predicate::str::ends_with("-80 -90 -100\n"));
}

#[test]
fn seq_overflow_exits_with_one() {
    lazyseq()
        .args(["seq", "--start", "120", "--step", "5", "--count", "3", "--type", "i8"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflows i8"));
}

#[test]
fn seq_huge_count_still_ends_in_the_fault() {
    lazyseq()
        .args(["seq", "--type", "i8", "--count", "1000000000000"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflows i8"));
}

#[test]
fn seq_rejects_bad_number() {
    lazyseq()
        .args(["seq", "--start", "ten"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn seq_json_is_an_array() {
    let out = lazyseq()
        .args(["--output-format", "json", "seq", "--count", "4", "--step", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let terms: Vec<i64> = serde_json::from_slice(&out).unwrap();
    assert_eq!(terms, vec![0, 3, 6, 9]);
}

#[test]
fn seq_defaults_come_from_env() {
    lazyseq()
        .env("LAZYSEQ__SEQ__COUNT", "3")
        .args(["seq"])
        .assert()
        .success()
        .stdout("0 1 2\n");
}

#[test]
fn seq_defaults_come_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[seq]\nstart = 1\nstep = 2\ncount = 4\n");
    lazyseq()
        .arg("--config")
        .arg(&path)
        .arg("seq")
        .assert()
        .success()
        .stdout("1 3 5 7\n");
}

// ── gcd ───────────────────────────────────────────────────────────────────────

#[test]
fn gcd_of_twenty_and_twenty_five() {
    lazyseq()
        .args(["gcd", "20", "25"])
        .assert()
        .success()
        .stdout("5\n");
}

// ── tour ──────────────────────────────────────────────────────────────────────

#[test]
fn tour_runs_every_section() {
    lazyseq()
        .args(["tour", "--no-clock"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gcd(20, 25) = 5"))
        .stdout(predicate::str::contains("0 4 16"))
        .stdout(predicate::str::contains(
            "progression(0, 1): 0 1 2 3 4 5 6 7 8 9 10",
        ))
        .stdout(predicate::str::contains("A is older!"))
        .stdout(predicate::str::contains("The answer is 42."))
        .stdout(predicate::str::contains("3.141592653589793"))
        .stdout(predicate::str::contains("tour.rs"));
}

#[test]
fn tour_json_report() {
    let out = lazyseq()
        .args(["tour", "--output-format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["gcd"], 5);
    assert_eq!(report["sequences"][1]["terms"][20], -100);
    assert_eq!(report["seniority"], "A is older!");
    assert_eq!(report["clock"].as_array().unwrap().len(), 5);
}

#[test]
fn tour_fault_in_configured_sequence_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[[tour.sequences]]\nstart = 9223372036854775806\nstep = 1\ncount = 5\n",
    );
    lazyseq()
        .arg("--config")
        .arg(&path)
        .args(["tour", "--no-clock"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("generating routine failed"));
}

// ── clock ─────────────────────────────────────────────────────────────────────

#[test]
fn clock_shows_requested_zone() {
    lazyseq()
        .args(["clock", "--zone", "Asia/Tokyo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UTC"))
        .stdout(predicate::str::contains("Asia/Tokyo"))
        .stdout(predicate::str::contains("+09:00"));
}

#[test]
fn clock_rejects_unknown_zone() {
    lazyseq()
        .args(["clock", "--zone", "Mars/Olympus_Mons"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown time zone"));
}

// ── config / init ─────────────────────────────────────────────────────────────

#[test]
fn missing_config_file_exits_with_four() {
    lazyseq()
        .args(["--config", "/definitely/not/here/lazyseq.toml", "gcd", "1", "2"])
        .assert()
        .code(4);
}

#[test]
fn init_then_read_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf").join("lazyseq.toml");

    lazyseq()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(path.exists());

    lazyseq()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "seq.count"])
        .assert()
        .success()
        .stdout("seq.count = 10\n");
}

#[test]
fn init_does_not_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[seq]\ncount = 2\n");

    lazyseq()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[seq]\ncount = 2\n");
}

#[test]
fn config_path_reports_explicit_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "");
    lazyseq()
        .arg("--config")
        .arg(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lazyseq.toml"));
}

// ── misc ──────────────────────────────────────────────────────────────────────

#[test]
fn version_flag() {
    lazyseq()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn completions_for_bash() {
    lazyseq()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lazyseq"));
}
