//! Aligned table and count rendering for job output.

use crate::types::{Job, JobTable};
use std::collections::BTreeMap;

/// A printable job table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    State,
    Name,
    Owner,
    Priority,
    Code,
    Start,
    Slots,
    Queue,
}

impl Column {
    /// Default column set.
    pub const NARROW: [Column; 3] = [Column::Id, Column::State, Column::Name];

    /// Extended column set.
    pub const FULL: [Column; 9] = [
        Column::Id,
        Column::State,
        Column::Name,
        Column::Owner,
        Column::Priority,
        Column::Code,
        Column::Start,
        Column::Slots,
        Column::Queue,
    ];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::State => "state",
            Column::Name => "name",
            Column::Owner => "owner",
            Column::Priority => "priority",
            Column::Code => "code",
            Column::Start => "start",
            Column::Slots => "slots",
            Column::Queue => "queue",
        }
    }

    /// Numeric columns are right-aligned in data rows.
    fn numeric(self) -> bool {
        matches!(self, Column::Id | Column::Priority | Column::Slots)
    }
}

impl Job {
    /// Rendered cell value for a column.
    pub fn field(&self, column: Column) -> String {
        match column {
            Column::Id => self.id.to_string(),
            Column::State => self.state.clone(),
            Column::Name => self.name.clone(),
            Column::Owner => self.owner.clone(),
            Column::Priority => self.priority.to_string(),
            Column::Code => self.code.clone(),
            Column::Start => self.start.clone(),
            Column::Slots => self.slots.to_string(),
            Column::Queue => self.queue.clone(),
        }
    }
}

fn pad(value: &str, width: usize, numeric: bool) -> String {
    if numeric {
        format!("{value:>width$}")
    } else {
        format!("{value:<width$}")
    }
}

/// Render the job table, one string per output line.
///
/// A column is as wide as its widest rendered value, stretched to the header
/// label when headers are requested. Rows come out ascending by job id.
/// An empty table renders as no lines at all, header included.
pub fn render_table(jobs: &JobTable, full: bool, headers: bool) -> Vec<String> {
    if jobs.is_empty() {
        return Vec::new();
    }

    let columns: &[Column] = if full { &Column::FULL } else { &Column::NARROW };
    let widths: Vec<usize> = columns
        .iter()
        .map(|&column| {
            let mut width = jobs
                .values()
                .map(|job| job.field(column).len())
                .max()
                .unwrap_or(0);
            if headers {
                width = width.max(column.label().len());
            }
            width
        })
        .collect();

    let mut lines = Vec::new();
    if headers {
        let row: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(&column, &width)| pad(column.label(), width, false))
            .collect();
        lines.push(row.join(" "));
    }
    for job in jobs.values() {
        let row: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(&column, &width)| pad(&job.field(column), width, column.numeric()))
            .collect();
        lines.push(row.join(" "));
    }
    lines
}

/// Render job counts: the bare total, or per-state totals when full.
///
/// Full output has one line per distinct state, sorted alphabetically, with
/// the state name padded to the widest state. No states means no lines.
pub fn render_counts(jobs: &JobTable, full: bool) -> Vec<String> {
    if !full {
        return vec![jobs.len().to_string()];
    }

    let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
    for job in jobs.values() {
        *totals.entry(job.state.as_str()).or_default() += 1;
    }

    let width = totals.keys().map(|state| state.len()).max().unwrap_or(0);
    totals
        .iter()
        .map(|(state, count)| format!("{state:<width$}\t{count}"))
        .collect()
}
