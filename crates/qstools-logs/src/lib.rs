//! Job log classification for qstools.
//!
//! Classify job log files by their final line and render summaries.

pub mod report;
pub mod sample;
pub mod status;

pub use report::{list_samples, summarize};
pub use sample::{read_log, scan_logs, LogError, LogSample};
pub use status::{classify, LogStatus};
