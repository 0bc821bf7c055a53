// crates/core/src/position.rs
//! Source coordinates tracked by the scan driver.

use core::fmt;

use serde::{Deserialize, Serialize};

/// 1始まりの行・列位置
///
/// A character's position is the value held *before* it is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// Position of the first character of any input.
    #[must_use]
    pub const fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Moves past `c`: a newline starts the next line, anything else
    /// moves one column to the right.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
