//! Runs the `mettalint` binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn mettalint() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mettalint"))
}

#[test]
fn prints_json_and_exits_zero_with_diagnostics() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("scenario.metta");
    std::fs::write(&path, "(let $x 5 (+ $x $y))\n").expect("write source");

    let output = mettalint().arg(&path).output().expect("run mettalint");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("json array");
    let records = value.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["line"], 1);
    assert_eq!(
        records[0]["message"],
        "Variable '$y' used without definition"
    );
}

#[test]
fn clean_file_prints_empty_array() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("clean.metta");
    std::fs::write(&path, "(= (double $x)\n   (+ $x $x))\n").expect("write source");

    let output = mettalint().arg(&path).output().expect("run mettalint");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "[]");
}

#[test]
fn missing_file_fails_without_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let output = mettalint()
        .arg(dir.path().join("nope.metta"))
        .output()
        .expect("run mettalint");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn reads_standard_input() {
    let mut child = mettalint()
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn mettalint");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"$orphan\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json array");
    assert_eq!(
        value[0]["message"],
        "Variable '$orphan' used without definition"
    );
}
