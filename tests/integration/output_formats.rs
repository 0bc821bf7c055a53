// tests/integration/output_formats.rs
use tempfile::TempDir;

#[path = "../common/mod.rs"]
mod common;
use common::{BALANCED, MISMATCHED, bracecheck, stdout_json, write_source};

#[test]
fn json_document_lists_files_and_summary() {
    let dir = TempDir::new().unwrap();
    let good = write_source(dir.path(), "good.c", BALANCED);
    let bad = write_source(dir.path(), "bad.c", MISMATCHED);

    let output = bracecheck()
        .args(["--format", "json"])
        .arg(&good)
        .arg(&bad)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let v = stdout_json(&output);
    assert_eq!(v["files"].as_array().map(Vec::len), Some(2));
    assert_eq!(v["files"][0]["outcome"], "balanced");
    assert_eq!(v["files"][1]["outcome"], "unbalanced");

    let diag = &v["files"][1]["diagnostics"][0];
    assert_eq!(diag["kind"], "mismatched_closer");
    assert_eq!(diag["open"], "paren");
    assert_eq!(diag["close"], "square");
    assert_eq!(diag["open_position"]["line"], 2);
    assert_eq!(diag["open_position"]["column"], 8);

    assert_eq!(v["summary"]["files"], 2);
    assert_eq!(v["summary"]["unbalanced"], 1);
}

#[test]
fn jsonl_emits_one_line_per_input_plus_summary() {
    let output = bracecheck()
        .args(["--format", "jsonl"])
        .write_stdin(BALANCED)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["type"], "file");
    assert_eq!(lines[0]["path"], "<stdin>");
    assert_eq!(lines[0]["final_state"], "normal");
    assert_eq!(lines[1]["type"], "summary");
    assert_eq!(lines[1]["balanced"], 1);
}

#[test]
fn json_reports_final_lexical_state() {
    let output = bracecheck()
        .args(["-f", "json"])
        .write_stdin("x = \"abc\\")
        .output()
        .unwrap();
    assert!(output.status.success());
    let v = stdout_json(&output);
    assert_eq!(v["files"][0]["final_state"], "in_string_escape");
}
