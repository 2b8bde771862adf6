use crate::services::{ActivityLogger, LogEntry, SystemRunner};
use crate::{config::FetcherConfig, engine::*, error::*, types::*};
use std::time::Instant;

/* ------------ public facade components ------------ */

pub struct Components {
    pub runner: Box<dyn ProcessRunner>,
    pub config: FetcherConfig,
}
impl Default for Components {
    fn default() -> Self {
        Self {
            runner: Box::new(SystemRunner),
            config: FetcherConfig::default(),
        }
    }
}

pub fn make_fetcher(components: &Components) -> StatsFetcher<'_> {
    StatsFetcher::new(&*components.runner, components.config.clone())
}

pub(crate) fn log_outcome<T>(
    event: &str,
    runner: &str,
    start: Instant,
    result: &Result<T>,
) -> LogEntry {
    let logger = ActivityLogger::new();
    let ms = start.elapsed().as_millis();
    match result {
        Ok(_) => logger.info(event, Some(&format!("{runner} succeeded in {ms}ms"))),
        Err(e) => logger.error(event, Some(&format!("{runner} failed in {ms}ms: {e}"))),
    }
}

/* ------------ entrypoints ------------ */

/// Run the YouTube scraper with the default setup and decode its stdout.
///
/// Blocks until the scraper exits. Fails with [`StatsError::InvalidResponse`]
/// when the output is not JSON and with [`StatsError::Io`] when the scraper
/// cannot be launched.
///
/// The default base directory is this crate's source root as seen at build
/// time (`CARGO_MANIFEST_DIR`). Pulled in from a registry that path lies
/// under `~/.cargo/registry/src` with no scraper checkout beside it, so
/// deployed binaries should build a [`FetcherConfig`] with
/// [`FetcherConfig::with_base_dir`] and call [`fetch_stats_with`] instead.
pub fn fetch_stats() -> Result<serde_json::Value> {
    fetch_stats_with(&Components::default())
}

pub fn fetch_stats_with(components: &Components) -> Result<serde_json::Value> {
    let start = Instant::now();
    let result = make_fetcher(components).fetch_stats();
    log_outcome("fetch_stats", components.runner.name(), start, &result);
    result
}

/// [`fetch_stats`] plus exit code, byte count and timing.
pub fn fetch_stats_report() -> Result<StatsReport> {
    fetch_stats_report_with(&Components::default())
}

pub fn fetch_stats_report_with(components: &Components) -> Result<StatsReport> {
    let start = Instant::now();
    let result = make_fetcher(components).fetch_stats_report();
    log_outcome("fetch_stats_report", components.runner.name(), start, &result);
    result
}
