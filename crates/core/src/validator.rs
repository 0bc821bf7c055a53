// crates/core/src/validator.rs
//! # Bracket Validator
//!
//! Receives live code characters only and keeps a LIFO stack of the
//! brackets that are still open. Defects are recorded and scanning goes
//! on; nothing here ever aborts.
//!
//! A closer is always checked against the most recently opened frame.
//! There is no search for the "nearest" opener of the same kind.

use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// 括弧の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketKind {
    /// `( )`
    Paren,
    /// `[ ]`
    Square,
    /// `{ }`
    Curly,
}

impl BracketKind {
    #[must_use]
    pub const fn from_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    #[must_use]
    pub const fn from_closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }

    #[must_use]
    pub const fn opener(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    #[must_use]
    pub const fn closer(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }
}

/// One opener that has not been closed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketFrame {
    pub kind: BracketKind,
    pub position: Position,
}

/// 括弧の不整合レポート
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A closer arrived while no bracket was open.
    UnmatchedCloser {
        position: Position,
        closer: BracketKind,
    },
    /// A closer does not pair with the innermost open bracket.
    MismatchedCloser {
        open_position: Position,
        open: BracketKind,
        close_position: Position,
        close: BracketKind,
    },
    /// Input ended while this bracket was still open.
    UnbalancedOpener {
        position: Position,
        opener: BracketKind,
    },
}

impl Diagnostic {
    /// Location the report points at: the offending closer, or the
    /// opener left open at end of input.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnmatchedCloser { position, .. } | Self::UnbalancedOpener { position, .. } => {
                *position
            }
            Self::MismatchedCloser { close_position, .. } => *close_position,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnmatchedCloser { .. } => "unmatched closer",
            Self::MismatchedCloser { .. } => "mismatched closer",
            Self::UnbalancedOpener { .. } => "unbalanced opener",
        }
    }

    /// Message without the location prefix.
    #[must_use]
    pub fn message(&self) -> Message<'_> {
        Message(self)
    }
}

/// Display adapter for the bare message of a [`Diagnostic`].
pub struct Message<'a>(&'a Diagnostic);

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Diagnostic::UnmatchedCloser { closer, .. } => {
                write!(f, "unmatched closing '{}'", closer.closer())
            }
            Diagnostic::MismatchedCloser {
                open_position,
                open,
                close,
                ..
            } => write!(
                f,
                "closing '{}' does not match '{}' opened at {open_position}",
                close.closer(),
                open.opener()
            ),
            Diagnostic::UnbalancedOpener { opener, .. } => {
                write!(f, "unclosed '{}'", opener.opener())
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position(), self.message())
    }
}

/// 括弧検証器
#[derive(Debug, Default)]
pub struct Validator {
    stack: Vec<BracketFrame>,
    diagnostics: Vec<Diagnostic>,
    max_depth: usize,
}

impl Validator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stack: Vec::new(),
            diagnostics: Vec::new(),
            max_depth: 0,
        }
    }

    /// Takes one live code character at `position`. Anything that is not
    /// a bracket is ignored.
    pub fn accept(&mut self, c: char, position: Position) {
        if let Some(kind) = BracketKind::from_opener(c) {
            self.stack.push(BracketFrame { kind, position });
            self.max_depth = self.max_depth.max(self.stack.len());
        } else if let Some(close) = BracketKind::from_closer(c) {
            self.close(close, position);
        }
    }

    fn close(&mut self, close: BracketKind, close_position: Position) {
        let Some(frame) = self.stack.pop() else {
            log::trace!("unmatched '{}' at {close_position}", close.closer());
            self.diagnostics.push(Diagnostic::UnmatchedCloser {
                position: close_position,
                closer: close,
            });
            return;
        };

        if frame.kind != close {
            log::trace!(
                "'{}' at {close_position} closes '{}' from {}",
                close.closer(),
                frame.kind.opener(),
                frame.position
            );
            self.diagnostics.push(Diagnostic::MismatchedCloser {
                open_position: frame.position,
                open: frame.kind,
                close_position,
                close,
            });
        }
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Deepest nesting reached so far.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Open frames, outermost first.
    #[must_use]
    pub fn frames(&self) -> &[BracketFrame] {
        &self.stack
    }

    /// Reports recorded so far, before end of input.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Ends the input: every frame still open becomes an
    /// [`Diagnostic::UnbalancedOpener`], oldest first.
    #[must_use]
    pub fn finish(mut self) -> Vec<Diagnostic> {
        let leftover = core::mem::take(&mut self.stack);
        self.diagnostics
            .extend(leftover.into_iter().map(|frame| Diagnostic::UnbalancedOpener {
                position: frame.position,
                opener: frame.kind,
            }));
        self.diagnostics
    }
}
