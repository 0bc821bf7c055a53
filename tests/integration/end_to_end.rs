// tests/integration/end_to_end.rs
use predicates::prelude::*;
use tempfile::TempDir;

#[path = "../common/mod.rs"]
mod common;
use common::{BALANCED, EXTRA_CLOSER, MISMATCHED, UNCLOSED, bracecheck, write_source};

#[test]
fn shows_help() {
    bracecheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bracecheck"))
        .stdout(predicate::str::contains("--passthrough"));
}

#[test]
fn balanced_stdin_exits_zero() {
    bracecheck()
        .write_stdin(BALANCED)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn extra_closer_reported_with_position() {
    bracecheck()
        .write_stdin(EXTRA_CLOSER)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "<stdin>:1:18: unmatched closing '}'",
        ));
}

#[test]
fn mismatch_names_both_brackets() {
    let dir = TempDir::new().unwrap();
    let path = write_source(dir.path(), "mismatch.c", MISMATCHED);

    bracecheck()
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "mismatch.c:2:13: closing ']' does not match '(' opened at 2:8",
        ));
}

#[test]
fn unclosed_opener_at_its_own_position() {
    bracecheck()
        .write_stdin(UNCLOSED)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<stdin>:1:10: unclosed '{'"));
}

#[test]
fn every_input_is_checked() {
    let dir = TempDir::new().unwrap();
    let good = write_source(dir.path(), "good.c", BALANCED);
    let bad = write_source(dir.path(), "bad.c", EXTRA_CLOSER);

    bracecheck()
        .args(["-j", "2"])
        .arg(&bad)
        .arg(&good)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad.c:1:18"))
        .stderr(predicate::str::contains("good.c").not());
}

#[test]
fn missing_file_exits_two_but_scans_the_rest() {
    let dir = TempDir::new().unwrap();
    let bad = write_source(dir.path(), "bad.c", EXTRA_CLOSER);

    bracecheck()
        .arg(dir.path().join("missing.c"))
        .arg(&bad)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("bad.c:1:18"));
}

#[test]
fn quiet_prints_nothing() {
    bracecheck()
        .arg("-q")
        .write_stdin(MISMATCHED)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn max_diagnostics_truncates_output() {
    bracecheck()
        .args(["--max-diagnostics", "2"])
        .write_stdin(")))))")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<stdin>:1:2:"))
        .stderr(predicate::str::contains("<stdin>:1:3:").not())
        .stderr(predicate::str::contains("3 more diagnostic(s) not shown"));
}

#[test]
fn rejects_zero_jobs() {
    bracecheck().args(["-j", "0"]).assert().failure().code(2);
}
