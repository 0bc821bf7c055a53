// crates/core/src/lexer.rs
//! # Lexical Classifier
//!
//! Character-at-a-time classifier for C-family source text. It decides,
//! without any knowledge of brackets, whether a character is live code or
//! buried inside a comment or literal.
//!
//! ## Supported Syntax
//!
//! - **Line comments**: `//` up to (not including) the newline
//! - **Block comments**: `/* */`, without nesting
//! - **String literals**: `"..."` with `\` escapes
//! - **Character literals**: `'...'` with `\` escapes
//!
//! ## Output of one step
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `code` | forwarded to the bracket validator |
//! | `release_slash` | a held `/` is live code placed before this character |
//! | `echo` | written to the passthrough stream |
//!
//! A `/` in normal code is held back until the next character says whether
//! it starts a comment or is a plain operator.
//!
//! ## Usage Example
//!
//! ```rust
//! use bracecheck_core::lexer::{Classifier, LexState};
//!
//! let mut lexer = Classifier::new();
//! for c in "x = \"(\"; // )".chars() {
//!     lexer.feed(c);
//! }
//! assert_eq!(lexer.state(), LexState::LineComment);
//! ```

use serde::{Deserialize, Serialize};

/// 字句状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexState {
    /// Plain code.
    #[default]
    Normal,
    /// Saw `/` in code; waiting for `/` or `*`.
    SeenSlash,
    /// Inside `/* ... */`.
    BlockComment,
    /// Inside a block comment right after a `*`.
    BlockCommentStar,
    /// Inside `// ...`.
    LineComment,
    /// Inside `"..."`.
    InString,
    /// Inside a string right after `\`.
    InStringEscape,
    /// Inside `'...'`.
    InChar,
    /// Inside a character literal right after `\`.
    InCharEscape,
}

impl LexState {
    #[must_use]
    pub const fn is_comment(self) -> bool {
        matches!(
            self,
            Self::BlockComment | Self::BlockCommentStar | Self::LineComment
        )
    }

    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::InString | Self::InStringEscape | Self::InChar | Self::InCharEscape
        )
    }

    /// Short human-readable name used in reports.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Normal => "code",
            Self::SeenSlash => "code after '/'",
            Self::BlockComment | Self::BlockCommentStar => "block comment",
            Self::LineComment => "line comment",
            Self::InString | Self::InStringEscape => "string literal",
            Self::InChar | Self::InCharEscape => "character literal",
        }
    }
}

/// Result of classifying one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// State after the character.
    pub state: LexState,
    /// The character is live code and reaches the validator.
    pub code: bool,
    /// A held `/` is released as live code ahead of the character.
    pub release_slash: bool,
    /// The character is echoed in passthrough mode.
    pub echo: bool,
}

impl Step {
    const fn code(state: LexState) -> Self {
        Self {
            state,
            code: true,
            release_slash: false,
            echo: true,
        }
    }

    const fn literal(state: LexState) -> Self {
        Self {
            state,
            code: false,
            release_slash: false,
            echo: true,
        }
    }

    const fn hidden(state: LexState) -> Self {
        Self {
            state,
            code: false,
            release_slash: false,
            echo: false,
        }
    }
}

/// Applies one character to `state`.
///
/// Pure function over the transition table; [`Classifier`] wraps it with
/// the state it carries between calls.
#[must_use]
pub const fn transition(state: LexState, c: char) -> Step {
    use LexState::{
        BlockComment, BlockCommentStar, InChar, InCharEscape, InString, InStringEscape,
        LineComment, Normal, SeenSlash,
    };

    match state {
        Normal => normal(c),
        SeenSlash => match c {
            '/' => Step::hidden(LineComment),
            '*' => Step::hidden(BlockComment),
            _ => {
                let mut step = normal(c);
                step.release_slash = true;
                step
            }
        },
        BlockComment => match c {
            '*' => Step::hidden(BlockCommentStar),
            _ => Step::hidden(BlockComment),
        },
        BlockCommentStar => match c {
            '/' => Step::hidden(Normal),
            '*' => Step::hidden(BlockCommentStar),
            _ => Step::hidden(BlockComment),
        },
        LineComment => match c {
            '\n' => Step {
                state: Normal,
                code: false,
                release_slash: false,
                echo: true,
            },
            _ => Step::hidden(LineComment),
        },
        InString => match c {
            '"' => Step::literal(Normal),
            '\\' => Step::literal(InStringEscape),
            _ => Step::literal(InString),
        },
        InStringEscape => Step::literal(InString),
        InChar => match c {
            '\'' => Step::literal(Normal),
            '\\' => Step::literal(InCharEscape),
            _ => Step::literal(InChar),
        },
        InCharEscape => Step::literal(InChar),
    }
}

const fn normal(c: char) -> Step {
    match c {
        '/' => Step::hidden(LexState::SeenSlash),
        '"' => Step::code(LexState::InString),
        '\'' => Step::code(LexState::InChar),
        _ => Step::code(LexState::Normal),
    }
}

/// 字句分類器 (状態を保持する)
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    state: LexState,
}

impl Classifier {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LexState::Normal,
        }
    }

    /// Classifies `c` and moves to the next state.
    pub fn feed(&mut self, c: char) -> Step {
        let step = transition(self.state, c);
        self.state = step.state;
        step
    }

    /// Ends the input. Returns the held `/` when the input ended right
    /// after one; it is live code since no comment can follow.
    pub fn finish(&mut self) -> Option<char> {
        if self.state == LexState::SeenSlash {
            self.state = LexState::Normal;
            Some('/')
        } else {
            None
        }
    }

    #[must_use]
    pub const fn state(&self) -> LexState {
        self.state
    }

    #[must_use]
    pub const fn in_comment(&self) -> bool {
        self.state.is_comment()
    }

    #[must_use]
    pub const fn in_literal(&self) -> bool {
        self.state.is_literal()
    }

    pub fn reset(&mut self) {
        self.state = LexState::Normal;
    }
}
