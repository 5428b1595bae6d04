//! CLI argument parsing for the qstools binaries.
//!
//! Both tools take -v for version output, so clap's built-in -V flag is
//! disabled in favour of an explicit version argument.

use camino::Utf8PathBuf;
use clap::{ArgAction, ArgGroup, Parser};
use qstools_logs::LogStatus;

#[derive(Parser, Debug)]
#[command(name = "qsjobs", version, disable_version_flag = true)]
#[command(about = "Display running qsub jobs")]
pub struct JobsArgs {
    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Display extended output
    #[arg(short = 'f', long = "full")]
    pub full: bool,

    /// Display header line on data
    #[arg(short = 'c', long = "column-headers", conflicts_with = "count")]
    pub header: bool,

    /// Display job counts, not data
    #[arg(short = 'n', long = "number")]
    pub count: bool,
}

#[derive(Parser, Debug)]
#[command(name = "qslogs", version, disable_version_flag = true)]
#[command(about = "Summarise qsub job log files")]
#[command(group = ArgGroup::new("filter").multiple(false))]
pub struct LogsArgs {
    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// List log files
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Output log data
    #[arg(short = 'd', long = "show-data")]
    pub show_data: bool,

    /// Only list running samples
    #[arg(short = 'r', long = "list-running", group = "filter")]
    pub list_running: bool,

    /// Only list failed samples
    #[arg(short = 'f', long = "list-failed", group = "filter")]
    pub list_failed: bool,

    /// Only list completed samples
    #[arg(short = 'c', long = "list-completed", group = "filter")]
    pub list_completed: bool,

    /// Only list killed samples
    #[arg(short = 'k', long = "list-killed", group = "filter")]
    pub list_killed: bool,

    /// Only list unknown samples
    #[arg(short = 'u', long = "list-unknown", group = "filter")]
    pub list_unknown: bool,

    /// Log files
    #[arg(required = true, value_name = "LOGS")]
    pub files: Vec<Utf8PathBuf>,
}

impl LogsArgs {
    /// Status selected by the filter flags, if any. The flags are a clap
    /// group, so at most one can be set.
    pub fn status_filter(&self) -> Option<LogStatus> {
        if self.list_running {
            Some(LogStatus::Running)
        } else if self.list_failed {
            Some(LogStatus::Failed)
        } else if self.list_completed {
            Some(LogStatus::Completed)
        } else if self.list_killed {
            Some(LogStatus::Killed)
        } else if self.list_unknown {
            Some(LogStatus::Unknown)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verify_cli() {
        JobsArgs::command().debug_assert();
        LogsArgs::command().debug_assert();
    }

    #[test]
    fn test_jobs_header_conflicts_with_count() {
        assert!(JobsArgs::try_parse_from(["qsjobs", "-c", "-n"]).is_err());
        assert!(JobsArgs::try_parse_from(["qsjobs", "-f", "-n"]).is_ok());
    }

    #[test]
    fn test_logs_filters_are_exclusive() {
        assert!(LogsArgs::try_parse_from(["qslogs", "-l", "-r", "-f", "a.log"]).is_err());

        let args = LogsArgs::try_parse_from(["qslogs", "-l", "-k", "a.log"]).unwrap();
        assert_eq!(args.status_filter(), Some(LogStatus::Killed));
    }

    #[test]
    fn test_logs_require_files() {
        assert!(LogsArgs::try_parse_from(["qslogs"]).is_err());

        let args = LogsArgs::try_parse_from(["qslogs", "a.log", "b.log"]).unwrap();
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.status_filter(), None);
    }
}
