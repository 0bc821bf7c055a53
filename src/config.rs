// src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options::OutputFormat;
use bracecheck_core::ScanConfig;
use std::fmt;
use std::path::{Path, PathBuf};

/// One input stream to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` は標準入力
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    /// Whether this input names the same file as `path`. Paths are compared
    /// as given and, when both exist, after canonicalization.
    fn is_same_file(&self, path: &Path) -> bool {
        let Self::File(own) = self else {
            return false;
        };
        if own == path {
            return true;
        }
        match (std::fs::canonicalize(own), std::fs::canonicalize(path)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<Input>,
    pub format: OutputFormat,
    pub passthrough: bool,
    pub output_path: Option<PathBuf>,
    pub quiet: bool,
    pub jobs: usize,
    pub scan: ScanConfig,
}

impl Config {
    /// Files may be scanned concurrently only when nothing is streamed in
    /// input order.
    #[must_use]
    pub fn parallel(&self) -> bool {
        self.jobs > 1
            && !self.passthrough
            && self.inputs.len() > 1
            && !self.inputs.contains(&Input::Stdin)
    }
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let inputs: Vec<Input> = if args.paths.is_empty() {
            vec![Input::Stdin]
        } else {
            args.paths.into_iter().map(Input::from_path).collect()
        };

        if inputs.iter().filter(|i| **i == Input::Stdin).count() > 1 {
            return Err(AppError::Config(
                "standard input ('-') can only be given once".to_string(),
            ));
        }

        let output = args.output;
        if output.passthrough && output.output.is_none() && output.format.uses_stdout() {
            return Err(AppError::Config(format!(
                "--format {} writes to stdout; use --output FILE for passthrough",
                format_name(output.format)
            )));
        }

        if let Some(out) = &output.output {
            if let Some(input) = inputs.iter().find(|i| i.is_same_file(out)) {
                return Err(AppError::Config(format!(
                    "passthrough output '{}' would overwrite input '{input}'",
                    out.display()
                )));
            }
        }

        let jobs = args.scan.jobs.unwrap_or_else(num_cpus::get).max(1);

        Ok(Self {
            inputs,
            format: output.format,
            passthrough: output.passthrough,
            output_path: output.output,
            quiet: output.quiet,
            jobs,
            scan: ScanConfig {
                max_diagnostics: args.scan.max_diagnostics,
            },
        })
    }
}

const fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
        OutputFormat::Jsonl => "jsonl",
    }
}
