//! Log file reading.

use crate::status::{classify, LogStatus};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("failed to read log file {path}: {source}")]
    Read {
        path: Utf8PathBuf,
        source: io::Error,
    },
}

/// One classified log file.
#[derive(Debug, Clone)]
pub struct LogSample {
    /// Path as given on the command line
    pub path: Utf8PathBuf,

    /// Trimmed final line, empty for an empty file
    pub last_line: String,

    /// Status inferred from the final line
    pub status: LogStatus,
}

/// Read a log file and classify its final line.
pub fn read_log(path: &Utf8Path) -> Result<LogSample, LogError> {
    let content = fs::read_to_string(path).map_err(|source| LogError::Read {
        path: path.to_owned(),
        source,
    })?;
    let last_line = content.lines().last().unwrap_or("").trim().to_string();
    let status = classify(&last_line);
    Ok(LogSample {
        path: path.to_owned(),
        last_line,
        status,
    })
}

/// Read every log file in argument order. The first unreadable file fails
/// the whole scan.
pub fn scan_logs(paths: &[Utf8PathBuf]) -> Result<Vec<LogSample>, LogError> {
    paths.iter().map(|path| read_log(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_log(dir: &tempfile::TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        Utf8PathBuf::from_path_buf(path).unwrap()
    }

    #[test]
    fn test_read_log_last_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, "job.log", "Job 42 started\nJob 42 completed at 10:00\n");
        let sample = read_log(&path).unwrap();
        assert_eq!(sample.last_line, "Job 42 completed at 10:00");
        assert_eq!(sample.status, LogStatus::Completed);
    }

    #[test]
    fn test_read_log_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_log(&dir, "empty.log", "");
        let sample = read_log(&path).unwrap();
        assert_eq!(sample.last_line, "");
        assert_eq!(sample.status, LogStatus::Unknown);
    }

    #[test]
    fn test_read_log_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("absent.log")).unwrap();
        let err = read_log(&path).unwrap_err();
        assert!(matches!(err, LogError::Read { .. }));
    }

    #[test]
    fn test_scan_logs_keeps_order_and_aborts_on_error() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_log(&dir, "a.log", "Job 1 started\n");
        let second = write_log(&dir, "b.log", "Job 2 failed\n");
        let samples = scan_logs(&[first.clone(), second.clone()]).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].status, LogStatus::Running);
        assert_eq!(samples[1].status, LogStatus::Failed);

        let missing = Utf8PathBuf::from_path_buf(dir.path().join("absent.log")).unwrap();
        assert!(scan_logs(&[first, missing, second]).is_err());
    }
}
