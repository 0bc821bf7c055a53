// src/lib.rs
//! `bracecheck` command-line front end.
//!
//! The scanning itself lives in `bracecheck_core`; this crate handles
//! arguments, input streams, passthrough output and report formatting.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod options;
pub mod parsers;
pub mod presentation;
pub mod version;

pub use version::VERSION;
