// src/app.rs
use crate::args::Args;
use crate::config::Config;
use crate::engine;
use crate::presentation::{self, Summary};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

/// Overall result mapped onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every input is balanced.
    Balanced,
    /// At least one diagnostic was reported.
    Unbalanced,
    /// At least one input could not be read.
    Failed,
}

impl From<Summary> for Status {
    fn from(summary: Summary) -> Self {
        if summary.failed > 0 {
            Self::Failed
        } else if summary.unbalanced > 0 {
            Self::Unbalanced
        } else {
            Self::Balanced
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Balanced => Self::SUCCESS,
            Status::Unbalanced => Self::from(1_u8),
            Status::Failed => Self::from(2_u8),
        }
    }
}

pub fn run(args: Args) -> Result<Status> {
    let config = Config::try_from(args).context("invalid arguments")?;
    tracing::info!(
        inputs = config.inputs.len(),
        jobs = config.jobs,
        passthrough = config.passthrough,
        "bracecheck v{}",
        crate::VERSION
    );

    let stdout = io::stdout();
    let reports = if config.passthrough {
        let mut sink: Box<dyn Write> = match &config.output_path {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("failed to create output file '{}'", path.display())
            })?)),
            None => Box::new(BufWriter::new(stdout.lock())),
        };
        let reports = engine::run(&config, Some(sink.as_mut())).context("scan failed")?;
        sink.flush().context("failed to flush passthrough output")?;
        reports
    } else {
        engine::run(&config, None).context("scan failed")?
    };

    let mut out = stdout.lock();
    let mut err = io::stderr().lock();
    let summary = presentation::emit(&reports, &config, &mut out, &mut err)
        .context("failed to emit report")?;
    out.flush().context("failed to flush stdout")?;

    tracing::info!(
        files = summary.files,
        balanced = summary.balanced,
        unbalanced = summary.unbalanced,
        failed = summary.failed,
        "done"
    );
    Ok(Status::from(summary))
}
