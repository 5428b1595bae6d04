//! qsjobs - display running qsub jobs.

use clap::Parser;
use qstools_cli::JobsArgs;
use qstools_sge::{query_qstat, render_counts, render_table, QstatError};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = JobsArgs::parse();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &JobsArgs) -> Result<(), QstatError> {
    let jobs = query_qstat().await?;
    let lines = if args.count {
        render_counts(&jobs, args.full)
    } else {
        render_table(&jobs, args.full, args.header)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
