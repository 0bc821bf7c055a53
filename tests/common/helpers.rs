// tests/common/helpers.rs
//! Test helper functions to reduce unwrap() calls and provide better error messages.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Command for the `bracecheck` binary under test.
pub fn bracecheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bracecheck"))
}

/// Create a source file named `name` under `dir`.
///
/// # Panics
///
/// Panics with a descriptive message if file creation fails.
pub fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("Failed to create test file at {:?}: {}", path, e));
    path
}

/// Parse stdout of a finished command as JSON.
///
/// # Panics
///
/// Panics if stdout is not valid JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {:?}", String::from_utf8_lossy(&output.stdout)))
}
