//! Streaming bracket-balance checker for C-family source text.
//!
//! The [`lexer`] decides which characters are live code, the
//! [`validator`] checks bracket nesting over those characters, and the
//! [`scanner`] drives both one character at a time.
#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod config;
pub mod lexer;
pub mod position;
pub mod report;
pub mod scanner;
pub mod validator;

pub use config::ScanConfig;
pub use lexer::{Classifier, LexState, Step};
pub use position::Position;
pub use report::{Outcome, ScanReport};
pub use scanner::{Echo, Scanner, scan_str, strip_comments};
pub use validator::{BracketFrame, BracketKind, Diagnostic, Validator};
