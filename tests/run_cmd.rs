use std::fs;

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/trials.csv");

#[test]
fn run_writes_reports_and_replays_events() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("out");
    let events = tmp.path().join("events.jsonl");
    fs::write(
        &events,
        "{\"view\":\"histogram\",\"control\":\"bin_width\",\"value\":{\"value\":100}}\n\
         {\"view\":\"scatter\",\"control\":\"statuses\",\"value\":{\"active\":[5]}}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(FIXTURE)
        .arg("--out")
        .arg(&out_dir)
        .arg("--events")
        .arg(&events)
        .arg("--json")
        .arg("--tsv");
    let out = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Input: 3 trials (2 dropped), 2 phases, 2 statuses"));
    assert!(stdout.contains("Events: 2 applied, 1 published, 1 rejected"));

    let json: Value =
        serde_json::from_str(&fs::read_to_string(out_dir.join("dashboard.json")).unwrap())
            .unwrap();
    assert_eq!(json["tool"], "kira-trialsdash");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["input_meta"]["trials"], 3);
    assert_eq!(json["input_meta"]["dropped"], 2);
    assert_eq!(json["views"]["histogram"]["bin_count"], 4);
    assert_eq!(json["views"]["histogram"]["revision"], 1);
    assert_eq!(json["views"]["histogram"]["rows"].as_array().unwrap().len(), 8);
    assert_eq!(json["views"]["scatter"]["revision"], 0);
    assert_eq!(json["views"]["scatter"]["rows"].as_array().unwrap().len(), 3);
    assert_eq!(json["views"]["summary"].as_array().unwrap().len(), 2);
    assert_eq!(json["events"]["rejected"], 1);

    let warnings: Vec<&str> = json["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert!(warnings.iter().any(|w| w.contains("dropped")));
    assert!(warnings.iter().any(|w| w.starts_with("event 2 (scatter/statuses) ignored")));

    let hist = fs::read_to_string(out_dir.join("histogram.tsv")).unwrap();
    assert_eq!(hist.lines().count(), 9);
    let summary = fs::read_to_string(out_dir.join("summary.tsv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
    assert!(out_dir.join("scatter.tsv").exists());
}

#[test]
fn run_without_flags_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("out");

    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("run").arg("--input").arg(FIXTURE).arg("--out").arg(&out_dir);
    cmd.assert().success();

    assert!(out_dir.is_dir());
    assert!(!out_dir.join("dashboard.json").exists());
    assert!(!out_dir.join("histogram.tsv").exists());
}

#[test]
fn invalid_default_bin_width_fails() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(FIXTURE)
        .arg("--out")
        .arg(tmp.path())
        .arg("--bin-width")
        .arg("0");
    cmd.assert().failure();
}

#[test]
fn tiny_bin_width_event_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let out_dir = tmp.path().join("out");
    let events = tmp.path().join("events.jsonl");
    fs::write(
        &events,
        "{\"view\":\"histogram\",\"control\":\"bin_width\",\"value\":{\"value\":1e-300}}\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(FIXTURE)
        .arg("--out")
        .arg(&out_dir)
        .arg("--events")
        .arg(&events);
    let out = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(out).unwrap();
    assert!(stdout.contains("Events: 1 applied, 0 published, 1 rejected"));
}

#[test]
fn tiny_default_bin_width_fails_cleanly() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(FIXTURE)
        .arg("--out")
        .arg(tmp.path())
        .arg("--bin-width")
        .arg("1e-300");
    cmd.assert().code(1);
}
