//! Log status classification.

use std::fmt;

/// Outcome inferred from a log file's final line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStatus {
    Unknown,
    Running,
    Completed,
    Failed,
    Killed,
}

impl LogStatus {
    /// Fixed reporting order for summary output.
    pub const SUMMARY_ORDER: [LogStatus; 5] = [
        LogStatus::Running,
        LogStatus::Completed,
        LogStatus::Failed,
        LogStatus::Killed,
        LogStatus::Unknown,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LogStatus::Unknown => "unknown",
            LogStatus::Running => "running",
            LogStatus::Completed => "completed",
            LogStatus::Failed => "failed",
            LogStatus::Killed => "killed",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification rules, applied in order. Every rule is evaluated and a
/// later match overwrites an earlier one, so a line carrying both
/// "completed" and "imminent SIGKILL" ends up Killed.
const RULES: &[(&[&str], LogStatus)] = &[
    (&["completed"], LogStatus::Completed),
    (&["started"], LogStatus::Running),
    (&["failed"], LogStatus::Failed),
    (&["imminent SIGSTOP", "imminent SIGKILL"], LogStatus::Killed),
];

/// Classify a log line by substring search.
pub fn classify(line: &str) -> LogStatus {
    let mut status = LogStatus::Unknown;
    for (needles, matched) in RULES {
        if needles.iter().any(|needle| line.contains(needle)) {
            status = *matched;
        }
    }
    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_keywords() {
        assert_eq!(classify("Job 42 completed at 10:00"), LogStatus::Completed);
        assert_eq!(classify("Job 42 started at 09:00"), LogStatus::Running);
        assert_eq!(classify("Job 42 failed with code 1"), LogStatus::Failed);
        assert_eq!(classify("warning: imminent SIGSTOP"), LogStatus::Killed);
        assert_eq!(classify("warning: imminent SIGKILL"), LogStatus::Killed);
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify("some unrelated text"), LogStatus::Unknown);
        assert_eq!(classify(""), LogStatus::Unknown);
    }

    #[test]
    fn test_classify_later_rule_wins() {
        // The kill rule is last, so it beats any other keyword on the line.
        assert_eq!(
            classify("Job 42 completed before imminent SIGKILL"),
            LogStatus::Killed
        );
        assert_eq!(
            classify("Job 42 started, imminent SIGSTOP"),
            LogStatus::Killed
        );
        // "started" is checked after "completed".
        assert_eq!(
            classify("completed jobs restarted by scheduler"),
            LogStatus::Running
        );
    }
}
