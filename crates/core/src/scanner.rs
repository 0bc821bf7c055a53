// crates/core/src/scanner.rs
//! # Scan driver
//!
//! Strict left-to-right fold over the input. Every character goes through
//! the [`Classifier`]; only live code reaches the [`Validator`]. The driver
//! owns the running [`Position`], so a character is always reported at the
//! coordinates it had before being consumed.
//!
//! Passthrough output is returned per step as an [`Echo`]; the caller
//! decides where it goes. Nothing here touches I/O.
//!
//! ```rust
//! use bracecheck_core::scanner::{scan_str, strip_comments};
//!
//! assert!(scan_str("int a[3]={1,2,3};").is_balanced());
//!
//! let (report, code) = strip_comments("f(); /* ) */ g();\n");
//! assert!(report.is_balanced());
//! assert_eq!(code, "f();  g();\n");
//! ```

use alloc::string::String;
use core::fmt;

use crate::config::ScanConfig;
use crate::lexer::{Classifier, LexState};
use crate::position::Position;
use crate::report::ScanReport;
use crate::validator::Validator;

/// Characters to write to the passthrough stream after one step.
///
/// At most two: a released `/` or the `\r` of a line comment's CRLF
/// ending, followed by the current character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Echo {
    slash: bool,
    cr: bool,
    ch: Option<char>,
}

impl Echo {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.slash && !self.cr && self.ch.is_none()
    }

    /// Writes the echoed characters to `out`.
    ///
    /// # Errors
    /// Propagates the sink's error.
    pub fn write_to<W: fmt::Write + ?Sized>(self, out: &mut W) -> fmt::Result {
        for c in self {
            out.write_char(c)?;
        }
        Ok(())
    }
}

impl Iterator for Echo {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.slash {
            self.slash = false;
            Some('/')
        } else if self.cr {
            self.cr = false;
            Some('\r')
        } else {
            self.ch.take()
        }
    }
}

/// 走査器: 分類器と検証器をつなぐ
#[derive(Debug, Default)]
pub struct Scanner {
    config: ScanConfig,
    classifier: Classifier,
    validator: Validator,
    position: Position,
    slash_at: Position,
    /// `\r` swallowed by a line comment, kept back in case `\n` follows.
    held_cr: bool,
    chars: usize,
    newlines: usize,
    last: Option<char>,
}

impl Scanner {
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Consumes one character.
    pub fn feed(&mut self, c: char) -> Echo {
        let in_line_comment = self.classifier.state() == LexState::LineComment;
        let step = self.classifier.feed(c);
        let mut echo = Echo::default();

        if core::mem::take(&mut self.held_cr) && c == '\n' {
            echo.cr = true;
        }
        if in_line_comment && c == '\r' {
            self.held_cr = true;
        }

        if step.release_slash {
            self.validator.accept('/', self.slash_at);
            echo.slash = true;
        }
        if step.state == LexState::SeenSlash {
            self.slash_at = self.position;
        }
        if step.code {
            self.validator.accept(c, self.position);
        }
        if step.echo {
            echo.ch = Some(c);
        }

        self.position.advance(c);
        self.chars += 1;
        if c == '\n' {
            self.newlines += 1;
        }
        self.last = Some(c);
        echo
    }

    /// Consumes every character of `chunk`, writing echoed output to `out`.
    ///
    /// # Errors
    /// Propagates the sink's error; the characters consumed so far stay
    /// consumed.
    pub fn feed_into<W: fmt::Write + ?Sized>(&mut self, chunk: &str, out: &mut W) -> fmt::Result {
        for c in chunk.chars() {
            self.feed(c).write_to(out)?;
        }
        Ok(())
    }

    /// Consumes every character of `chunk`, discarding passthrough output.
    pub fn feed_str(&mut self, chunk: &str) {
        for c in chunk.chars() {
            self.feed(c);
        }
    }

    /// Position of the next character.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn state(&self) -> LexState {
        self.classifier.state()
    }

    /// Current bracket nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.validator.depth()
    }

    /// Ends the input. The returned [`Echo`] holds a trailing `/` that was
    /// still waiting for its next character.
    #[must_use]
    pub fn finish(mut self) -> (ScanReport, Echo) {
        let mut echo = Echo::default();
        if let Some(c) = self.classifier.finish() {
            self.validator.accept(c, self.slash_at);
            echo.slash = true;
        }

        let final_state = self.classifier.state();
        let max_depth = self.validator.max_depth();
        let lines = match self.last {
            None => 0,
            Some('\n') => self.newlines,
            Some(_) => self.newlines + 1,
        };

        let mut report = ScanReport {
            diagnostics: self.validator.finish(),
            suppressed: 0,
            final_state,
            chars: self.chars,
            lines,
            max_depth,
        };
        if let Some(limit) = self.config.max_diagnostics {
            report.truncate(limit);
        }

        log::debug!(
            "scan finished: {} chars, {} lines, {} defects, state {:?}",
            report.chars,
            report.lines,
            report.defect_count(),
            report.final_state
        );
        (report, echo)
    }
}

/// Scans `input` with the default settings.
#[must_use]
pub fn scan_str(input: &str) -> ScanReport {
    let mut scanner = Scanner::default();
    scanner.feed_str(input);
    scanner.finish().0
}

/// Scans `input` and returns it with every comment removed.
///
/// Line comments keep their terminating newline; block comments vanish
/// without a trace.
#[must_use]
pub fn strip_comments(input: &str) -> (ScanReport, String) {
    let mut scanner = Scanner::default();
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        out.extend(scanner.feed(c));
    }
    let (report, tail) = scanner.finish();
    out.extend(tail);
    (report, out)
}
