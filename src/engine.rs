use crate::{config::FetcherConfig, error::*, types::*};
use chrono::Utc;
use std::time::Instant;

/// Launches a child for an [`Invocation`] and blocks until it exits.
pub trait ProcessRunner: Send + Sync {
    /// Short label used in activity log lines.
    fn name(&self) -> &'static str;
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

/// Decode captured stdout as one JSON document.
///
/// Numbers keep their source text, so integers past `u64` and exponents
/// past `f64` come back unchanged. Nesting is capped at 128 levels by
/// serde_json. Any parse failure, empty input included, collapses to
/// [`StatsError::InvalidResponse`].
pub fn decode_stats(stdout: &[u8]) -> Result<serde_json::Value> {
    serde_json::from_slice(stdout).map_err(|_| StatsError::InvalidResponse)
}

pub struct StatsFetcher<'a> {
    pub runner: &'a dyn ProcessRunner,
    pub config: FetcherConfig,
}

impl<'a> StatsFetcher<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, config: FetcherConfig) -> Self {
        Self { runner, config }
    }

    pub fn invocation(&self) -> Invocation {
        self.config.invocation()
    }

    /// Run the scraper once and return its decoded stdout.
    pub fn fetch_stats(&self) -> Result<serde_json::Value> {
        self.fetch_stats_report().map(StatsReport::into_payload)
    }

    /// Like [`fetch_stats`](Self::fetch_stats) but keeps exit code, byte
    /// count and timing alongside the payload.
    pub fn fetch_stats_report(&self) -> Result<StatsReport> {
        let invocation = self.invocation();
        let start = Instant::now();

        // Exit status is not checked; stdout is decoded either way.
        let output = self.runner.run(&invocation)?;
        let payload = decode_stats(&output.stdout)?;

        Ok(StatsReport {
            payload,
            exit_code: output.exit_code,
            stdout_bytes: output.stdout.len(),
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            fetched_at: Utc::now(),
            invocation,
        })
    }
}
