//! SGE integration for qstools.
//!
//! Query job status via qstat and render job tables.

pub mod command;
pub mod qstat;
pub mod table;
pub mod types;

pub use command::{run_with_timeout, CommandError};
pub use qstat::{parse_qstat_xml, query_qstat, QstatError};
pub use table::{render_counts, render_table, Column};
pub use types::{Job, JobTable};
