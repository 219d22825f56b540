//! CLI integration tests for x86level.
//!
//! These tests run the built binary against listing fixtures, temporary
//! files and piped standard input.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

/// Get the path to the x86level binary.
fn x86level_bin() -> String {
    env!("CARGO_BIN_EXE_x86level").to_string()
}

/// Get the path to a test fixture.
fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

/// Run x86level with the given arguments and no input.
fn run_x86level(args: &[&str]) -> Output {
    Command::new(x86level_bin())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute x86level")
}

/// Run x86level with `input` piped to standard input.
fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(x86level_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute x86level");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to stdin");
    child.wait_with_output().expect("Failed to wait for x86level")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// =============================================================================
// Basic Command Tests
// =============================================================================

#[test]
fn test_help() {
    let output = run_x86level(&["--help"]);
    assert!(output.status.success(), "x86level --help should succeed");
    let text = stdout(&output);
    assert!(text.contains("microarchitecture level"), "Help should describe the tool");
    for flag in ["--verbose", "--extended", "--statistics", "--input", "--format"] {
        assert!(text.contains(flag), "Help should show {flag}");
    }
}

#[test]
fn test_version() {
    let output = run_x86level(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("x86level"));
}

#[test]
fn test_unknown_flag_fails() {
    let output = run_x86level(&["--no-such-flag"]);
    assert!(!output.status.success());
}

// =============================================================================
// Classification
// =============================================================================

#[test]
fn test_empty_stdin_reports_v0() {
    let output = run_x86level(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sGOAMD64=v0\n");
}

#[test]
fn test_stdin_listing() {
    let output = run_with_stdin(&[], "MOVQ X0, X1\nPOPCNT AX, BX\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sGOAMD64=v2\n");
}

#[test]
fn test_register_sensitive_from_stdin() {
    let output = run_with_stdin(&[], "VMOVNTDQ Y0, (AX)\n");
    assert_eq!(stdout(&output), "sGOAMD64=v3\n");

    let output = run_with_stdin(&[], "VMOVNTDQ Z0, (AX)\n");
    assert_eq!(stdout(&output), "sGOAMD64=v4\n");
}

#[test]
fn test_input_file() {
    let path = fixture_path("sse4.txt");
    let output = run_x86level(&["-i", &path]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sGOAMD64=v2\n");
}

#[test]
fn test_input_long_flag() {
    let path = fixture_path("avx512.txt");
    let output = run_x86level(&["--input", &path]);
    assert_eq!(stdout(&output), "sGOAMD64=v4\n");
}

#[test]
fn test_temp_file_input() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "TEXT main.f(SB) f.go").unwrap();
    writeln!(file, "  f.go:3\t0x1000\tc5f877\tVZEROUPPER").unwrap();
    file.flush().unwrap();

    let output = run_x86level(&["-i", file.path().to_str().unwrap()]);
    assert_eq!(stdout(&output), "sGOAMD64=v3\n");
}

#[test]
fn test_multiple_inputs_are_merged() {
    let sse4 = fixture_path("sse4.txt");
    let avx512 = fixture_path("avx512.txt");
    let output = run_x86level(&["-s", "-i", &sse4, "-i", &avx512]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("x86 6\n"), "v1 counts should be summed: {text}");
    assert!(text.contains("v2 2\n"));
    assert!(text.contains("v3 3\n"));
    assert!(text.contains("v4 1\n"));
    assert!(text.ends_with("sGOAMD64=v4\n"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_input_fails() {
    let output = run_x86level(&["-i", "/nonexistent/listing.txt"]);
    assert!(!output.status.success(), "Missing input should fail");
    assert!(output.stdout.is_empty(), "No report should be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to open input"), "stderr: {stderr}");
}

#[test]
fn test_missing_second_input_fails_before_output() {
    let sse4 = fixture_path("sse4.txt");
    let output = run_x86level(&["-v", "-i", &sse4, "-i", "/nonexistent/listing.txt"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_utf8_input_is_classified() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(b"\xff\xfe POPCNT AX, BX\n").unwrap();
    file.flush().unwrap();

    let output = run_x86level(&["-i", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sGOAMD64=v2\n");
}

#[test]
fn test_overlong_line_reports_partial_results() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "POPCNT AX, BX").unwrap();
    file.write_all(&vec![b'A'; 70_000]).unwrap();
    writeln!(file).unwrap();
    writeln!(file, "VPTERNLOGD $0x96, Z1, Z2, Z3").unwrap();
    file.flush().unwrap();

    let output = run_x86level(&["-i", file.path().to_str().unwrap()]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "sGOAMD64=v2\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2 exceeds"), "stderr: {stderr}");
}

// =============================================================================
// Output Options
// =============================================================================

#[test]
fn test_verbose_reports_findings() {
    let path = fixture_path("sse4.txt");
    let output = run_x86level(&["-v", "-i", &path]);
    let text = stdout(&output);
    assert!(text.contains("Found v2 instruction POPCNT in function main.go:6 main.main(SB) /home/user/prog/main.go"));
    assert!(!text.contains("Found v1"), "Baseline hits are not reported");
    assert!(text.ends_with("Minimum required GOAMD64=v2\n"));
}

#[test]
fn test_json_output() {
    let path = fixture_path("avx512.txt");
    let output = run_x86level(&["--format", "json", "-v", "-i", &path]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.trim_start().starts_with('{'), "Only JSON on stdout: {text}");
    assert!(text.contains("\"goamd64\": \"v4\""));
    assert!(!text.contains("Found"));
}
