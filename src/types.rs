use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything needed to launch the scraper once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args,
            cwd: cwd.into(),
        }
    }
}

/// What a runner hands back once the child has exited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: Vec<u8>,
    /// `None` when the child was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn new(stdout: impl Into<Vec<u8>>, exit_code: Option<i32>) -> Self {
        Self {
            stdout: stdout.into(),
            exit_code,
        }
    }
}

/// Decoded stats plus telemetry about the run that produced them.
///
/// `exit_code` is informational only: a failing scraper whose stdout still
/// parses yields a report like any other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    pub payload: serde_json::Value,
    pub invocation: Invocation,
    pub exit_code: Option<i32>,
    pub stdout_bytes: usize,
    pub duration_ms: u64,
    pub fetched_at: DateTime<Utc>,
}

impl StatsReport {
    /// Consume the report and return just the decoded stats.
    pub fn into_payload(self) -> serde_json::Value {
        self.payload
    }
}
