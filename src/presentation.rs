// src/presentation.rs
use bracecheck_core::{Outcome, ScanReport};
use serde::Serialize;
use std::io::{self, Write};

use crate::config::Config;
use crate::engine::FileReport;
use crate::options::OutputFormat;

/// 集計結果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub files: usize,
    pub balanced: usize,
    pub unbalanced: usize,
    pub failed: usize,
    pub diagnostics: usize,
}

impl Summary {
    #[must_use]
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Self {
            files: reports.len(),
            ..Self::default()
        };
        for r in reports {
            match &r.result {
                Ok(report) if report.is_balanced() => summary.balanced += 1,
                Ok(report) => {
                    summary.unbalanced += 1;
                    summary.diagnostics += report.defect_count();
                }
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

#[derive(Serialize)]
struct JsonFile<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<Outcome>,
    #[serde(flatten)]
    report: Option<&'a ScanReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a FileReport> for JsonFile<'a> {
    fn from(r: &'a FileReport) -> Self {
        let (outcome, report, error) = match &r.result {
            Ok(report) => (Some(report.outcome()), Some(report), None),
            Err(e) => (None, None, Some(e.to_string())),
        };
        Self {
            path: r.input.to_string(),
            outcome,
            report,
            error,
        }
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    version: &'static str,
    files: Vec<JsonFile<'a>>,
    summary: Summary,
}

/// Writes the reports in the configured format.
///
/// Text diagnostics and per-input errors go to `err`; JSON formats write
/// the report to `out` and still send read errors to `err`.
///
/// # Errors
/// Returns an error if writing to either stream fails.
pub fn emit(
    reports: &[FileReport],
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<Summary> {
    let summary = Summary::from_reports(reports);

    for r in reports {
        if let Err(e) = &r.result {
            writeln!(err, "bracecheck: {e}")?;
        }
    }

    if config.quiet {
        return Ok(summary);
    }

    match config.format {
        OutputFormat::Text => print_text(reports, err)?,
        OutputFormat::Json => print_json(reports, summary, out)?,
        OutputFormat::Jsonl => print_jsonl(reports, summary, out)?,
    }
    Ok(summary)
}

fn print_text(reports: &[FileReport], err: &mut dyn Write) -> io::Result<()> {
    for r in reports {
        let Ok(report) = &r.result else {
            continue;
        };
        for d in &report.diagnostics {
            let pos = d.position();
            writeln!(
                err,
                "{}:{}:{}: {}",
                r.input,
                pos.line,
                pos.column,
                d.message()
            )?;
        }
        if report.suppressed > 0 {
            writeln!(
                err,
                "{}: {} more diagnostic(s) not shown",
                r.input, report.suppressed
            )?;
        }
    }
    Ok(())
}

fn print_json(reports: &[FileReport], summary: Summary, out: &mut dyn Write) -> io::Result<()> {
    let doc = JsonDocument {
        version: crate::VERSION,
        files: reports.iter().map(JsonFile::from).collect(),
        summary,
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}

fn print_jsonl(reports: &[FileReport], summary: Summary, out: &mut dyn Write) -> io::Result<()> {
    for r in reports {
        let mut v = serde_json::to_value(JsonFile::from(r))?;
        if let Some(obj) = v.as_object_mut() {
            obj.insert("type".to_string(), "file".into());
        }
        writeln!(out, "{v}")?;
    }
    let mut v = serde_json::to_value(summary)?;
    if let Some(obj) = v.as_object_mut() {
        obj.insert("type".to_string(), "summary".into());
    }
    writeln!(out, "{v}")
}
