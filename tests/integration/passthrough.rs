// tests/integration/passthrough.rs
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[path = "../common/mod.rs"]
mod common;
use common::{EXTRA_CLOSER, bracecheck, write_source};

const SOURCE: &str = "int x = 10 / 2; /* block\n comment */ int y;\nchar *s = \"// kept\"; // dropped\n";
const STRIPPED: &str = "int x = 10 / 2;  int y;\nchar *s = \"// kept\"; \n";

#[test]
fn strips_comments_to_stdout() {
    bracecheck()
        .arg("--strip-comments")
        .write_stdin(SOURCE)
        .assert()
        .success()
        .stdout(STRIPPED);
}

#[test]
fn passthrough_keeps_diagnostics_on_stderr() {
    bracecheck()
        .arg("-p")
        .write_stdin(EXTRA_CLOSER)
        .assert()
        .code(1)
        .stdout(EXTRA_CLOSER)
        .stderr(predicate::str::contains("1:18: unmatched closing '}'"));
}

#[test]
fn passthrough_to_file_allows_json_report() {
    let dir = TempDir::new().unwrap();
    let src = write_source(dir.path(), "in.c", SOURCE);
    let out = dir.path().join("out.c");

    bracecheck()
        .args(["-p", "-f", "json", "-o"])
        .arg(&out)
        .arg(&src)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""));

    assert_eq!(fs::read_to_string(&out).unwrap(), STRIPPED);
}

#[test]
fn passthrough_concatenates_inputs_in_order() {
    let dir = TempDir::new().unwrap();
    let a = write_source(dir.path(), "a.c", "a(); // one\n");
    let b = write_source(dir.path(), "b.c", "/* two */b();\n");

    bracecheck()
        .args(["-p", "-j", "4"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("a(); \nb();\n");
}

#[test]
fn output_naming_an_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    let src = write_source(dir.path(), "in.c", SOURCE);

    bracecheck()
        .args(["-p", "-o"])
        .arg(&src)
        .arg(&src)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("would overwrite input"));

    assert_eq!(fs::read_to_string(&src).unwrap(), SOURCE);
}

#[test]
fn json_with_stdout_passthrough_is_rejected() {
    bracecheck()
        .args(["-p", "-f", "json"])
        .write_stdin("x;")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output FILE"));
}
