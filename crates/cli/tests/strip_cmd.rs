//! CLI tests for the `jsonc strip` and `jsonc check` subcommands.

use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

use assert_cmd::cargo;

const SAMPLE_JSONC: &str = "{ //c1\n  \"x\": 1, #c2\n  \"y\": true /*c3*/ }";
const SAMPLE_CLEAN: &str = "{ \n  \"x\": 1, \n  \"y\": true  }";

fn jsonc_cmd() -> Command {
    Command::new(cargo::cargo_bin!("jsonc"))
}

fn write_temp_jsonc(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("test.jsonc");
    fs::write(&path, content).expect("write temp jsonc");
    (dir, path.to_string_lossy().to_string())
}

fn run_with_stdin(args: &[&str], stdin_body: &str) -> std::process::Output {
    let mut child = jsonc_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn jsonc command");

    {
        let stdin = child.stdin.as_mut().expect("stdin handle");
        stdin
            .write_all(stdin_body.as_bytes())
            .expect("write stdin body");
    }

    child.wait_with_output().expect("wait for output")
}

#[test]
fn strip_file_to_stdout() {
    let (_dir, path) = write_temp_jsonc(SAMPLE_JSONC);
    let output = jsonc_cmd()
        .args(["strip", &path])
        .output()
        .expect("run strip");
    assert!(
        output.status.success(),
        "strip should succeed, stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), SAMPLE_CLEAN);
}

#[test]
fn strip_reads_stdin_with_dash_path() {
    let output = run_with_stdin(&["strip", "-"], SAMPLE_JSONC);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SAMPLE_CLEAN);
}

#[test]
fn strip_write_updates_file_in_place() {
    let (_dir, path) = write_temp_jsonc(SAMPLE_JSONC);
    let output = jsonc_cmd()
        .args(["strip", &path, "--write"])
        .output()
        .expect("run strip --write");
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "in-place write prints nothing");
    assert_eq!(fs::read_to_string(&path).expect("read back"), SAMPLE_CLEAN);
}

#[test]
fn strip_write_rejects_stdin() {
    let output = run_with_stdin(&["strip", "-", "--write"], SAMPLE_JSONC);
    assert!(!output.status.success());
}

#[test]
fn strip_remove_empty_lines_drops_comment_only_lines() {
    let (_dir, path) = write_temp_jsonc("{\n  // gone\n  \"a\": 1\n}");
    let output = jsonc_cmd()
        .args(["strip", &path, "--remove-empty-lines"])
        .output()
        .expect("run strip --remove-empty-lines");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "{\n  \"a\": 1\n}"
    );
}

#[test]
fn strip_no_hash_leaves_hash_text_alone() {
    // With `#` comments disabled the hash marker is plain text.
    let (_dir, path) = write_temp_jsonc("{ \"tag\": \"v1\" } #trailing\n");
    let strict = jsonc_cmd()
        .args(["strip", &path, "--no-hash"])
        .output()
        .expect("run strip --no-hash");
    assert!(strict.status.success());
    assert_eq!(
        String::from_utf8_lossy(&strict.stdout),
        "{ \"tag\": \"v1\" } #trailing\n"
    );

    let default = jsonc_cmd()
        .args(["strip", &path])
        .output()
        .expect("run strip");
    assert_eq!(
        String::from_utf8_lossy(&default.stdout),
        "{ \"tag\": \"v1\" } \n"
    );
}

#[test]
fn strip_error_emits_json_envelope() {
    let (_dir, path) = write_temp_jsonc("{\n  \"a\": 1 /* oops\n}");
    let output = jsonc_cmd()
        .args(["strip", &path, "--output", "json"])
        .output()
        .expect("run strip on broken input");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty(), "no partial output on failure");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let envelope: serde_json::Value =
        serde_json::from_str(stderr.trim()).expect("stderr should be a JSON envelope");
    assert_eq!(envelope["error"]["kind"], "unterminated_comment");
    assert_eq!(envelope["error"]["opening"], "/*");
    assert_eq!(envelope["error"]["expected_closing"], "*/");
    assert_eq!(envelope["error"]["line"], 2);
    assert_eq!(envelope["error"]["column"], 10);
}

#[test]
fn check_succeeds_on_clean_input() {
    let output = run_with_stdin(&["check", "-"], SAMPLE_JSONC);
    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "check prints nothing on success");
}

#[test]
fn check_fails_on_unterminated_string() {
    let output = run_with_stdin(&["check", "-", "--output", "json"], "{ \"broken\n}");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let envelope: serde_json::Value =
        serde_json::from_str(stderr.trim()).expect("stderr should be a JSON envelope");
    assert_eq!(envelope["error"]["kind"], "unterminated_string");
}

#[test]
fn strip_missing_file_reports_read_failure() {
    let output = jsonc_cmd()
        .args(["strip", "no/such/file.jsonc"])
        .output()
        .expect("run strip on missing file");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to read"),
        "unexpected stderr: {stderr}"
    );
}
