// src/args.rs
use crate::options::OutputFormat;
use crate::parsers;
use clap::{ArgAction, Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bracecheck",
    version,
    about = "Check bracket balance in C-family source, skipping comments and literals"
)]
pub struct Args {
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub scan: ScanOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Files to check; none or `-` reads standard input
    #[arg(value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Diagnostic format
    #[arg(short, long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Echo the input with every comment removed
    #[arg(
        short,
        long,
        visible_alias = "strip-comments",
        help_heading = "Output"
    )]
    pub passthrough: bool,

    /// Write passthrough output to FILE instead of stdout
    #[arg(
        short,
        long,
        value_name = "FILE",
        requires = "passthrough",
        value_hint = ValueHint::FilePath,
        help_heading = "Output"
    )]
    pub output: Option<PathBuf>,

    /// Print no diagnostics; only the exit status tells the result
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ScanOptions {
    /// Keep at most N diagnostics per input
    #[arg(long, value_name = "N", value_parser = parsers::parse_positive_usize, help_heading = "Scan")]
    pub max_diagnostics: Option<usize>,

    /// Number of files scanned in parallel (default: number of CPUs)
    #[arg(short, long, value_name = "N", value_parser = parsers::parse_jobs, help_heading = "Scan")]
    pub jobs: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
