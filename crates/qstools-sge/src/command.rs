//! Command execution utilities for scheduler queries.

use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Error type for command execution.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("failed to execute {command}: {error}")]
    Execution { command: String, error: String },
    #[error("{command} failed: {stderr}")]
    Failed { command: String, stderr: String },
    #[error("{command} produced no result within {limit} seconds")]
    Timeout { command: String, limit: u64 },
}

/// Execute a command and return stdout as a string, bounded by a timeout.
///
/// The child is killed and reaped if the limit elapses before it exits.
pub async fn run_with_timeout(
    cmd: &mut Command,
    name: &str,
    limit: Duration,
) -> Result<String, CommandError> {
    tracing::debug!("running {} with a {:?} limit", name, limit);

    // Dropping the unfinished output future kills the child.
    cmd.kill_on_drop(true);

    let output = match tokio::time::timeout(limit, cmd.output()).await {
        Ok(result) => result.map_err(|e| CommandError::Execution {
            command: name.to_string(),
            error: e.to_string(),
        })?,
        Err(_) => {
            return Err(CommandError::Timeout {
                command: name.to_string(),
                limit: limit.as_secs(),
            });
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CommandError::Failed {
            command: name.to_string(),
            stderr: stderr.trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
