//! Query SGE jobs via qstat.

use crate::command::{run_with_timeout, CommandError};
use crate::types::{Job, JobTable};
use roxmltree::{Document, Node};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Bound on the qstat wait. qstat blocks indefinitely when the qmaster is
/// unreachable, so the query is cut off rather than left to hang.
const QSTAT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug)]
pub enum QstatError {
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("failed to parse qstat XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("job entry is missing required field {field}")]
    MissingField { field: &'static str },
    #[error("invalid value {value:?} for field {field}")]
    InvalidField { field: &'static str, value: String },
}

/// Query all jobs with qstat.
pub async fn query_qstat() -> Result<JobTable, QstatError> {
    let mut cmd = Command::new("qstat");
    cmd.arg("-xml");
    let stdout = run_with_timeout(&mut cmd, "qstat", QSTAT_TIMEOUT).await?;
    parse_qstat_xml(&stdout)
}

/// Parse a qstat XML document into a job table.
///
/// The document root holds job_info and queue_info sections, each with zero
/// or more job_list entries. job_info sections are read first, so a
/// queue_info entry overwrites a job_info entry with the same id.
pub fn parse_qstat_xml(xml: &str) -> Result<JobTable, QstatError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let mut jobs = JobTable::new();
    for section in ["job_info", "queue_info"] {
        for info in root.children().filter(|n| n.has_tag_name(section)) {
            for entry in info.children().filter(|n| n.has_tag_name("job_list")) {
                let job = parse_job_entry(entry)?;
                jobs.insert(job.id, job);
            }
        }
    }
    Ok(jobs)
}

fn child_text<'a>(entry: Node<'a, '_>, name: &str) -> Option<&'a str> {
    entry
        .children()
        .find(|n| n.has_tag_name(name))
        .and_then(|n| n.text())
}

fn required_text<'a>(entry: Node<'a, '_>, field: &'static str) -> Result<&'a str, QstatError> {
    child_text(entry, field).ok_or(QstatError::MissingField { field })
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, QstatError> {
    value.parse().map_err(|_| QstatError::InvalidField {
        field,
        value: value.to_string(),
    })
}

/// Extract a single job_list entry.
///
/// JAT_start_time and queue_name are absent (or empty) until the job is
/// scheduled and default to empty strings. Everything else is required.
fn parse_job_entry(entry: Node<'_, '_>) -> Result<Job, QstatError> {
    let id = parse_number("JB_job_number", required_text(entry, "JB_job_number")?)?;
    let state = entry
        .attribute("state")
        .ok_or(QstatError::MissingField { field: "state" })?;

    Ok(Job {
        id,
        name: required_text(entry, "JB_name")?.to_string(),
        priority: parse_number("JAT_prio", required_text(entry, "JAT_prio")?)?,
        owner: required_text(entry, "JB_owner")?.to_string(),
        code: required_text(entry, "state")?.to_string(),
        state: state.to_string(),
        start: child_text(entry, "JAT_start_time")
            .unwrap_or_default()
            .to_string(),
        queue: child_text(entry, "queue_name")
            .unwrap_or_default()
            .to_string(),
        slots: parse_number("slots", required_text(entry, "slots")?)?,
    })
}
