use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// 診断の出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `path:line:column: message` lines on stderr
    #[default]
    Text,
    /// One JSON document on stdout
    Json,
    /// One JSON object per input, then a summary line, on stdout
    Jsonl,
}

impl OutputFormat {
    /// Whether the report itself is written to stdout.
    #[must_use]
    pub const fn uses_stdout(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}
