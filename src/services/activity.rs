use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub event: String,
    pub details: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, event: &str, details: Option<&str>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            event: event.to_string(),
            details: details.map(|d| d.to_string()),
        }
    }

    /// Single-line form: `<timestamp> <event> <details>`
    pub fn line(&self) -> String {
        format!(
            "{} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.event,
            self.details.as_deref().unwrap_or("")
        )
        .trim_end()
        .to_string()
    }
}

/// Activity log routed through the `log` facade. Nothing is written to disk;
/// the host application decides where records end up.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityLogger;

impl ActivityLogger {
    pub fn new() -> Self {
        Self
    }

    pub fn log(&self, level: LogLevel, event: &str, details: Option<&str>) -> LogEntry {
        let entry = LogEntry::new(level, event, details);
        match entry.level {
            LogLevel::Info => ::log::info!(target: "ytstats", "{}", entry.line()),
            LogLevel::Error => ::log::error!(target: "ytstats", "{}", entry.line()),
        }
        entry
    }

    pub fn info(&self, event: &str, details: Option<&str>) -> LogEntry {
        self.log(LogLevel::Info, event, details)
    }

    pub fn error(&self, event: &str, details: Option<&str>) -> LogEntry {
        self.log(LogLevel::Error, event, details)
    }
}
