//! Logger handle

use crate::{LogArg, LogLevel, LogRecord, LogSink, NullSink};
use std::fmt;
use std::sync::Arc;

/// Handle used to submit records
///
/// Cloning is cheap; clones share the sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
    min_level: LogLevel,
    source: Option<String>,
}

impl Logger {
    /// Creates a logger that passes every level to `sink`
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            min_level: LogLevel::Trace,
            source: None,
        }
    }

    /// Creates a logger that discards everything
    pub fn null() -> Self {
        Self::new(Arc::new(NullSink))
    }

    /// Sets the minimum level that reaches the sink
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Derives a logger that tags records with `source`
    pub fn with_source(&self, source: impl Into<String>) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            min_level: self.min_level,
            source: Some(source.into()),
        }
    }

    /// Minimum level that reaches the sink
    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Source tag, if any
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns true if records at `level` reach the sink
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Submits one record
    ///
    /// Prefer the `log_*!` macros, which fill in `file` and `line`.
    pub fn submit(
        &self,
        level: LogLevel,
        template: &'static str,
        args: Vec<LogArg>,
        file: &'static str,
        line: u32,
    ) {
        if !self.enabled(level) {
            return;
        }
        let mut record = LogRecord::new(level, template, args, file, line);
        record.source = self.source.clone();
        self.sink.submit(record);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
