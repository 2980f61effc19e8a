#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("routinely-cli").unwrap()
}

#[test]
fn zero_days_prints_empty_json() {
    cli()
        .args(["-n", "0", "--json", "--seed", "1"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn negative_day_count_is_rejected() {
    cli()
        .args(["-n", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid day count"));
}

#[test]
fn default_run_prints_one_day() {
    cli()
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Day 1\n"))
        .stdout(predicate::str::contains("Day 2").not());
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = cli().args(["-n", "10", "--json", "--seed", "77"]).output().unwrap();
    let second = cli().args(["-n", "10", "--json", "--seed", "77"]).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_label_file_warns_and_continues() {
    let dir = tempdir().unwrap();
    cli()
        .args(["-n", "2", "--labels"])
        .arg(dir.path().join("nope.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stdout(predicate::str::contains("Day 2"));
}

#[test]
fn short_label_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("labels.txt");
    fs::write(&path, "scales\nchords\n").unwrap();
    cli()
        .args(["-n", "2", "--labels"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing label"));
}

#[test]
fn exports_are_written() {
    let dir = tempdir().unwrap();
    let labels = dir.path().join("labels.txt");
    fs::write(
        &labels,
        "scales\nchords\narpeggios\nfinger picking\nalternate picking\near training\nsong practice\n",
    )
    .unwrap();
    let json = dir.path().join("plan.json");
    let md = dir.path().join("plan.md");
    let csv = dir.path().join("plan.csv");

    cli()
        .args(["-n", "7", "--seed", "3", "--counts", "--labels"])
        .arg(&labels)
        .arg("--out-json")
        .arg(&json)
        .arg("--markdown")
        .arg(&md)
        .arg("--out-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("song practice"));

    let export: serde_json::Value = serde_json::from_slice(&fs::read(&json).unwrap()).unwrap();
    assert_eq!(export["day_count"], 7);
    assert_eq!(export["plan"].as_array().unwrap().len(), 7);
    assert!(export["generated_on"].is_string());
    let picks: u64 = export["picks"]
        .as_object()
        .unwrap()
        .values()
        .map(|c| c.as_u64().unwrap())
        .sum();
    assert_eq!(picks, 7 * 4);
    assert!(fs::read_to_string(&md).unwrap().starts_with("# Practice Routine\n"));
    assert_eq!(fs::read_to_string(&csv).unwrap().lines().count(), 1 + 7 * 4);
}
