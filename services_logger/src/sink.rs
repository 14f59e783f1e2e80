//! Log sinks

use crate::{LogLevel, LogRecord};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};

/// Destination for log records
///
/// Sinks receive records that already passed the logger's level threshold.
pub trait LogSink: Send + Sync {
    /// Accepts one record
    fn submit(&self, record: LogRecord);
}

/// Writes the text form of each record to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn submit(&self, record: LogRecord) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", record);
    }
}

/// Discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LogSink for NullSink {
    fn submit(&self, _record: LogRecord) {}
}

/// Forwards records to the `tracing` ecosystem
///
/// `Fatal` has no `tracing` counterpart and is emitted as an error event
/// carrying `fatal = true`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn submit(&self, record: LogRecord) {
        let message = record.message();
        let source = record.source.as_deref().unwrap_or("-");
        let file = record.file;
        let line = record.line;

        match record.level {
            LogLevel::Trace => tracing::trace!(source, file, line, "{}", message),
            LogLevel::Debug => tracing::debug!(source, file, line, "{}", message),
            LogLevel::Info => tracing::info!(source, file, line, "{}", message),
            LogLevel::Warn => tracing::warn!(source, file, line, "{}", message),
            LogLevel::Error => tracing::error!(source, file, line, "{}", message),
            LogLevel::Fatal => tracing::error!(fatal = true, source, file, line, "{}", message),
        }
    }
}

/// Keeps every record in memory
///
/// Clones share the same buffer, so a test can hand one clone to a logger
/// and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    /// Creates an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a copy of all captured records
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Returns the rendered messages of records at the given level
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|record| record.level == level)
            .map(LogRecord::message)
            .collect()
    }

    /// Returns true if any record at `level` renders to `message`
    pub fn contains(&self, level: LogLevel, message: &str) -> bool {
        self.lock()
            .iter()
            .any(|record| record.level == level && record.message() == message)
    }

    /// Number of captured records
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops all captured records
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn submit(&self, record: LogRecord) {
        self.lock().push(record);
    }
}
