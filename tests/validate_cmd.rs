use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/trials.csv");

#[test]
fn validate_command_ok() {
    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("validate").arg("--input").arg(FIXTURE);
    let out = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(out).unwrap();

    assert!(stdout.contains("kira-trialsdash validate ok"));
    assert!(stdout.contains("trials: 3"));
    assert!(stdout.contains("dropped: 2"));
    assert!(stdout.contains("phases: Phase 1, Phase 2"));
}

#[test]
fn validate_rejects_missing_column() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.csv");
    fs::write(&path, "Title,Status\nX,Completed\n").unwrap();

    let mut cmd = Command::cargo_bin("kira-trialsdash").unwrap();
    cmd.arg("validate").arg("--input").arg(&path);
    let out = cmd.assert().failure().get_output().stderr.clone();
    let stderr = String::from_utf8(out).unwrap();
    assert!(stderr.contains("missing required column"));
}
