#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use hl_eval::buffer_handler;
use pretty_assertions::assert_eq;

fn config_in(dir: &Path) -> RunConfig {
    RunConfig {
        source: dir.join("PROG1.HL"),
        nospaces: dir.join("NOSPACES.TXT"),
        res_sym: dir.join("RES_SYM.TXT"),
    }
}

#[test]
fn test_interpret_collects_artifacts() {
    let printer = buffer_handler();
    let report = interpret(["x: integer;", "x := 5;", "output<<x;"], printer.clone());

    assert_eq!(printer.get_output(), "5\n");
    assert_eq!(report.status, RunStatus::Completed);
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.normalized_code, "x:integer;\nx:=5;\noutput<<x;");
    assert_eq!(
        report.classified_code,
        "Reserved Word: integer\nSymbol: ;\nSymbol: :=\nSymbol: ;\n\
         Reserved Word: output\nSymbol: <\nSymbol: <<\nSymbol: ;"
    );
}

#[test]
fn test_execute_writes_both_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.source, "a: integer\na := 1\n").unwrap();

    let report = execute(&config, buffer_handler()).unwrap();

    assert!(report.diagnostics.is_empty());
    assert_eq!(
        std::fs::read_to_string(&config.nospaces).unwrap(),
        "a:integer\na:=1"
    );
    assert_eq!(
        std::fs::read_to_string(&config.res_sym).unwrap(),
        "Reserved Word: integer\nSymbol: :="
    );
}

#[test]
fn test_missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let err = execute(&config, buffer_handler()).unwrap_err();

    assert!(matches!(err, DriverError::Source(SourceError::NotFound { .. })));
    assert!(!config.nospaces.exists());
    assert!(!config.res_sym.exists());
}

#[test]
fn test_unwritable_artifact_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path());
    std::fs::write(&config.source, "x: integer\n").unwrap();
    config.nospaces = dir.path().join("no_such_dir").join("NOSPACES.TXT");

    let err = execute(&config, buffer_handler()).unwrap_err();
    assert!(matches!(err, DriverError::Artifact { .. }));
}
