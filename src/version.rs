// src/version.rs
//! Version string reported by `--version` and in JSON reports.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
