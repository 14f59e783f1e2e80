//! Runtime configuration

use services_logger::LogLevel;
use std::fmt;
use thiserror::Error;

/// Where log records are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    /// Plain text records on stdout
    Stdout,
    /// Events through a `tracing` subscriber
    Tracing,
}

impl fmt::Display for LogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogOutput::Stdout => write!(f, "stdout"),
            LogOutput::Tracing => write!(f, "tracing"),
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Least severe level that is written
    pub min_level: LogLevel,
    /// Log destination
    pub output: LogOutput,
    /// Whether each service's hello procedure is called after bring-up
    pub call_hello: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Trace,
            output: LogOutput::Stdout,
            call_hello: true,
        }
    }
}

/// Argument parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid output: {0}")]
    InvalidOutput(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// `--help` was given
    #[error("Help requested")]
    HelpRequested,
}

/// Parses command-line arguments (without the program name)
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<RuntimeConfig, ConfigError> {
    let mut config = RuntimeConfig::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_ref() {
            "--log-level" | "-l" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ConfigError::MissingValue("--log-level".to_string()))?
                    .as_ref();
                config.min_level = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidLevel(value.to_string()))?;
            }
            "--output" | "-o" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ConfigError::MissingValue("--output".to_string()))?
                    .as_ref();
                config.output = match value {
                    "stdout" => LogOutput::Stdout,
                    "tracing" => LogOutput::Tracing,
                    other => return Err(ConfigError::InvalidOutput(other.to_string())),
                };
            }
            "--no-hello" => {
                config.call_hello = false;
            }
            "--help" | "-h" => return Err(ConfigError::HelpRequested),
            other => return Err(ConfigError::UnknownOption(other.to_string())),
        }
        i += 1;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = parse_args::<&str>(&[]).unwrap();
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.min_level, LogLevel::Trace);
        assert_eq!(config.output, LogOutput::Stdout);
        assert!(config.call_hello);
    }

    #[test]
    fn test_all_options() {
        let config =
            parse_args(&["--log-level", "warn", "-o", "tracing", "--no-hello"]).unwrap();
        assert_eq!(config.min_level, LogLevel::Warn);
        assert_eq!(config.output, LogOutput::Tracing);
        assert!(!config.call_hello);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_args(&["--log-level"]),
            Err(ConfigError::MissingValue("--log-level".to_string()))
        );
        assert_eq!(
            parse_args(&["-l", "loud"]),
            Err(ConfigError::InvalidLevel("loud".to_string()))
        );
        assert_eq!(
            parse_args(&["--output", "syslog"]),
            Err(ConfigError::InvalidOutput("syslog".to_string()))
        );
        assert_eq!(
            parse_args(&["--verbose"]),
            Err(ConfigError::UnknownOption("--verbose".to_string()))
        );
        assert_eq!(parse_args(&["-h"]), Err(ConfigError::HelpRequested));
    }
}
