// src/main.rs
use bracecheck::app;
use bracecheck::args::Args;
use bracecheck::logging;
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.behavior.verbose);

    match app::run(args) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("bracecheck: {e:#}");
            ExitCode::from(2)
        }
    }
}
