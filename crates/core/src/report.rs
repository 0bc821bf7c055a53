// crates/core/src/report.rs
//! Result of one scan: diagnostics plus a few counters gathered on the way.

use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::lexer::LexState;
use crate::validator::Diagnostic;

/// Overall verdict of one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Balanced,
    Unbalanced,
}

/// Pure scan result, independent of where the input came from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Reports in the order they were found; unbalanced openers last.
    pub diagnostics: Vec<Diagnostic>,
    /// Reports left out because of `max_diagnostics`.
    pub suppressed: usize,
    /// Lexical state when the input ended.
    pub final_state: LexState,
    /// Number of characters consumed.
    pub chars: usize,
    /// Number of lines seen (a trailing newline does not open a new one).
    pub lines: usize,
    /// Deepest bracket nesting reached.
    pub max_depth: usize,
}

impl ScanReport {
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.is_balanced() {
            Outcome::Balanced
        } else {
            Outcome::Unbalanced
        }
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.diagnostics.is_empty() && self.suppressed == 0
    }

    /// Total number of defects found, including suppressed ones.
    #[must_use]
    pub fn defect_count(&self) -> usize {
        self.diagnostics.len() + self.suppressed
    }

    /// Keeps at most `limit` reports and counts the rest as suppressed.
    pub fn truncate(&mut self, limit: usize) {
        if self.diagnostics.len() > limit {
            self.suppressed += self.diagnostics.len() - limit;
            self.diagnostics.truncate(limit);
        }
    }
}
