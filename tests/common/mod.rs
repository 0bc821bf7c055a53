// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use helpers::*;
