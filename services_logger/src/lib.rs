//! # Logger Service
//!
//! This crate implements the logging collaborator used by the lifecycle
//! manager and by every service.
//!
//! ## Philosophy
//!
//! Logging is explicit and structured. A record keeps its severity, its
//! template, its typed arguments and its source location separately; text is
//! only produced when a sink decides to render it.
//!
//! ## Core Concepts
//!
//! - [`LogLevel`]: Severity, `Trace` through `Fatal`
//! - [`LogArg`]: Closed set of argument kinds a template can bind
//! - [`LogRecord`]: One submission (level, template, args, file, line)
//! - [`LogSink`]: Where records go (stdout, memory, `tracing`, nowhere)
//! - [`Logger`]: Cheap-clone handle with a level threshold and a source tag

pub mod arg;
pub mod logger;
pub mod record;
pub mod sink;

#[macro_use]
mod macros;

pub use arg::LogArg;
pub use logger::Logger;
pub use record::{render_template, LogRecord};
pub use sink::{LogSink, MemorySink, NullSink, StdoutSink, TracingSink};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Step-by-step tracing of operations
    Trace,
    /// Debug information
    Debug,
    /// Informational messages
    Info,
    /// Warnings
    Warn,
    /// Errors
    Error,
    /// Unrecoverable conditions
    Fatal,
}

impl LogLevel {
    /// All levels, least to most severe
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Fixed-width name used in the text form of a record
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO ",
            LogLevel::Warn => "WARN ",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().trim_end())
    }
}

/// Error returned when a level name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown log level: {0}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
