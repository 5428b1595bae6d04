//! Summary and listing output for log samples.

use crate::sample::LogSample;
use crate::status::LogStatus;

// Wide enough for the longest status name ("completed").
const STATUS_WIDTH: usize = 9;

/// Per-status tallies in fixed order, plus a TOTAL line.
pub fn summarize(samples: &[LogSample]) -> Vec<String> {
    let mut lines: Vec<String> = LogStatus::SUMMARY_ORDER
        .iter()
        .map(|&status| {
            let count = samples.iter().filter(|s| s.status == status).count();
            format!("{:<width$} {}", status.name(), count, width = STATUS_WIDTH)
        })
        .collect();
    lines.push(format!(
        "{:<width$} {}",
        "TOTAL",
        samples.len(),
        width = STATUS_WIDTH
    ));
    lines
}

/// One line per sample, restricted to a status when a filter is given.
///
/// With show_data each line carries the path padded to the longest input
/// path, a tab, then the final line. The path width spans all samples, not
/// just the filtered subset.
pub fn list_samples(
    samples: &[LogSample],
    filter: Option<LogStatus>,
    show_data: bool,
) -> Vec<String> {
    let path_width = samples
        .iter()
        .map(|sample| sample.path.as_str().len())
        .max()
        .unwrap_or(0);

    samples
        .iter()
        .filter(|sample| filter.is_none_or(|status| sample.status == status))
        .map(|sample| {
            if show_data {
                format!(
                    "{:<width$}\t{}",
                    sample.path.as_str(),
                    sample.last_line,
                    width = path_width
                )
            } else {
                sample.last_line.clone()
            }
        })
        .collect()
}
