//! Log console records shared by the UI and the backend stream

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Where a log record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Frontend,
    Backend,
    #[serde(other)]
    System,
}

impl LogSource {
    /// Short badge shown next to each record
    pub fn tag(&self) -> &'static str {
        match self {
            LogSource::Frontend => "UI",
            LogSource::Backend => "API",
            LogSource::System => "SYS",
        }
    }
}

impl std::fmt::Display for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogSource::Frontend => write!(f, "frontend"),
            LogSource::Backend => write!(f, "backend"),
            LogSource::System => write!(f, "system"),
        }
    }
}

/// One line of the log console
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub message: String,
    pub source: LogSource,
}

impl LogEntry {
    /// A record stamped with the current local time
    pub fn now(message: impl Into<String>, source: LogSource) -> Self {
        Self {
            timestamp: Local::now().to_rfc3339(),
            message: message.into(),
            source,
        }
    }

    pub fn frontend(message: impl Into<String>) -> Self {
        Self::now(message, LogSource::Frontend)
    }

    pub fn system(message: impl Into<String>) -> Self {
        Self::now(message, LogSource::System)
    }

    /// Parse a record received from the log stream.
    ///
    /// Malformed records are reported to the developer log and dropped.
    pub fn parse(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Failed to parse log message: {} ({:?})", e, raw);
                None
            }
        }
    }

    /// Local wall-clock time as `HH:MM:SS`, or the raw timestamp if it can't be parsed.
    ///
    /// The backend sends naive ISO timestamps; those are taken as local time.
    pub fn display_time(&self) -> String {
        if let Ok(time) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return time.with_timezone(&Local).format("%H:%M:%S").to_string();
        }
        if let Ok(time) = NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
            return time.format("%H:%M:%S").to_string();
        }
        self.timestamp.clone()
    }
}

/// Bounded, append-only buffer backing the log console
#[derive(Debug, Clone)]
pub struct LogBook {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for LogBook {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl LogBook {
    pub const DEFAULT_CAPACITY: usize = 1000;

    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(Self::DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Append a record, dropping the oldest one when full
    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.back()
    }
}
