//! qslogs - summarise qsub job log files.

use clap::Parser;
use qstools_cli::LogsArgs;
use qstools_logs::{list_samples, scan_logs, summarize, LogError};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = LogsArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &LogsArgs) -> Result<(), LogError> {
    let samples = scan_logs(&args.files)?;
    let lines = if args.list {
        list_samples(&samples, args.status_filter(), args.show_data)
    } else {
        summarize(&samples)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
