// src/engine.rs
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use bracecheck_core::{ScanConfig, ScanReport, Scanner};

use crate::config::{Config, Input};
use crate::error::{AppError, Result};

/// Scan result for one input, kept even when the input could not be read.
#[derive(Debug)]
pub struct FileReport {
    pub input: Input,
    pub result: Result<ScanReport>,
}

/// Scans every configured input.
///
/// Inputs are scanned one after another, echoing into `passthrough` when
/// it is given, unless [`Config::parallel`] allows a rayon pool. Results
/// always come back in input order.
///
/// # Errors
/// Returns an error if the thread pool cannot be built or writing to
/// `passthrough` fails. Per-input read errors are kept in [`FileReport`].
pub fn run(
    config: &Config,
    mut passthrough: Option<&mut (dyn Write + '_)>,
) -> Result<Vec<FileReport>> {
    if config.parallel() {
        tracing::debug!(jobs = config.jobs, files = config.inputs.len(), "parallel scan");
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs)
            .build()?;
        let reports: Vec<FileReport> = pool.install(|| {
            config
                .inputs
                .par_iter()
                .map(|input| FileReport {
                    input: input.clone(),
                    result: scan_input(input, config.scan, None),
                })
                .collect()
        });
        return Ok(reports);
    }

    let mut reports = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let result = match scan_input(input, config.scan, passthrough.as_deref_mut()) {
            Err(AppError::Output(err)) => return Err(AppError::Output(err)),
            other => other,
        };
        reports.push(FileReport {
            input: input.clone(),
            result,
        });
    }
    Ok(reports)
}

fn scan_input(
    input: &Input,
    scan: ScanConfig,
    passthrough: Option<&mut (dyn Write + '_)>,
) -> Result<ScanReport> {
    tracing::debug!(%input, "scanning");
    match input {
        Input::Stdin => {
            let stdin = io::stdin();
            scan_reader(stdin.lock(), scan, passthrough, input)
        }
        Input::File(path) => {
            let file = File::open(path).map_err(|e| AppError::read(path, e))?;
            scan_reader(BufReader::new(file), scan, passthrough, input)
        }
    }
}

/// Streams `reader` through a [`Scanner`] one line at a time.
///
/// Lines are decoded lossily, so invalid UTF-8 becomes U+FFFD in both the
/// column count and the passthrough output.
///
/// # Errors
/// Returns [`AppError::Read`] when reading fails and [`AppError::Output`]
/// when the passthrough sink fails.
pub fn scan_reader<R: BufRead>(
    mut reader: R,
    scan: ScanConfig,
    mut passthrough: Option<&mut (dyn Write + '_)>,
    input: &Input,
) -> Result<ScanReport> {
    let mut scanner = Scanner::new(scan);
    let mut buf = Vec::with_capacity(8 * 1024);
    let mut echoed = String::new();

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| AppError::read(input.to_string(), e))?;
        if n == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        match passthrough.as_deref_mut() {
            Some(out) => {
                echoed.clear();
                for c in line.chars() {
                    echoed.extend(scanner.feed(c));
                }
                out.write_all(echoed.as_bytes()).map_err(AppError::Output)?;
            }
            None => scanner.feed_str(&line),
        }
    }

    let (report, tail) = scanner.finish();
    if let Some(out) = passthrough {
        let tail: String = tail.collect();
        out.write_all(tail.as_bytes()).map_err(AppError::Output)?;
    }

    tracing::debug!(
        %input,
        defects = report.defect_count(),
        max_depth = report.max_depth,
        "scan complete"
    );
    Ok(report)
}
