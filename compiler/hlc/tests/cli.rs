// Test code uses unwrap for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Runs the `hl` binary in a scratch directory.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn hl(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hl"))
        .args(args)
        .current_dir(dir)
        .env_remove("HL_SOURCE")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn hl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn bare_hl_runs_default_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("PROG1.HL"), "x: integer;\nx := 5;\noutput<<x;\n").unwrap();

    let output = hl(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "5\nNO ERROR(S) FOUND\n");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("NOSPACES.TXT")).unwrap(),
        "x:integer;\nx:=5;\noutput<<x;"
    );
    assert!(dir.path().join("RES_SYM.TXT").exists());
}

#[test]
fn run_reports_errors_and_still_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.hl"), "y: string;\nz := 3;\n").unwrap();

    let output = hl(dir.path(), &["run", "bad.hl"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "ERROR\n\
         Error: Unsupported variable type 'string'\n\
         Error: Variable 'z' is not declared\n"
    );
}

#[test]
fn source_path_and_artifact_flags() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("demo.HL"), "output<<\"hi\";\n").unwrap();

    let output = hl(dir.path(), &["demo.HL", "--nospaces=ns.txt", "--res-sym=rs.txt"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "hi\nNO ERROR(S) FOUND\n");
    assert_eq!(
        std::fs::read_to_string(dir.path().join("ns.txt")).unwrap(),
        "output<<\"hi\";"
    );
    assert!(!dir.path().join("NOSPACES.TXT").exists());
}

#[test]
fn hl_source_env_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("other.hl"), "output<<\"env\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_hl"))
        .current_dir(dir.path())
        .env("HL_SOURCE", "other.hl")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    assert_eq!(stdout(&output), "env\nNO ERROR(S) FOUND\n");
}

#[test]
fn missing_source_fails_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();

    let output = hl(dir.path(), &["run"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot find file 'PROG1.HL'"));
    assert!(!dir.path().join("NOSPACES.TXT").exists());
    assert!(!dir.path().join("RES_SYM.TXT").exists());
}

#[test]
fn check_prints_coded_summary_only() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("prog.hl"),
        "x: integer\noutput<<\"quiet\"\nz := 3\n",
    )
    .unwrap();

    let output = hl(dir.path(), &["check", "prog.hl"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "ERROR\nError[E2002] line 3: Variable 'z' is not declared\n"
    );
    assert!(!dir.path().join("NOSPACES.TXT").exists());
}

#[test]
fn check_clean_program_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("prog.hl"), "x: double\nx := 1.5\n").unwrap();

    let output = hl(dir.path(), &["check", "prog.hl"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "NO ERROR(S) FOUND\n");
}

#[test]
fn lex_shows_normalized_lines_and_tokens() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("prog.hl"), "x: integer;\nexit\noutput<<x\n").unwrap();

    let output = hl(dir.path(), &["lex", "prog.hl"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "   1: x:integer;\n\
         \x20       Reserved Word: integer\n\
         \x20       Symbol: ;\n\
         \x20  2: <exit>\n"
    );
}

#[test]
fn explain_known_and_unknown_codes() {
    let dir = tempfile::tempdir().unwrap();

    let known = hl(dir.path(), &["--explain", "e1002"]);
    assert!(known.status.success());
    assert!(stdout(&known).starts_with("# E1002"));

    let unknown = hl(dir.path(), &["explain", "E9999"]);
    assert_eq!(unknown.status.code(), Some(1));
}

#[test]
fn unknown_command_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = hl(dir.path(), &["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
}
