//! Log records and template rendering

use crate::{LogArg, LogLevel};
use std::fmt::{self, Write};

/// A structured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    /// Severity
    pub level: LogLevel,
    /// Template with positional `{}` placeholders
    pub template: &'static str,
    /// Arguments bound to the placeholders, in order
    pub args: Vec<LogArg>,
    /// Source file of the submission site
    pub file: &'static str,
    /// Source line of the submission site
    pub line: u32,
    /// Subsystem tag (if known)
    pub source: Option<String>,
}

impl LogRecord {
    /// Creates a new record without a source tag
    pub fn new(
        level: LogLevel,
        template: &'static str,
        args: Vec<LogArg>,
        file: &'static str,
        line: u32,
    ) -> Self {
        Self {
            level,
            template,
            args,
            file,
            line,
            source: None,
        }
    }

    /// Sets the source tag
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Renders the template with its arguments
    pub fn message(&self) -> String {
        render_template(self.template, &self.args)
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}:{}] {}",
            self.level.label(),
            self.file,
            self.line,
            self.message()
        )
    }
}

/// Substitutes positional `{}` placeholders.
///
/// `{{` and `}}` produce literal braces. A placeholder with no argument left
/// is kept as `{}`; arguments with no placeholder are dropped.
pub fn render_template(template: &str, args: &[LogArg]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut args = args.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('{', Some('{')) => {
                chars.next();
                out.push('{');
            }
            ('{', Some('}')) => {
                chars.next();
                match args.next() {
                    Some(arg) => {
                        let _ = write!(out, "{}", arg);
                    }
                    None => out.push_str("{}"),
                }
            }
            ('}', Some('}')) => {
                chars.next();
                out.push('}');
            }
            (other, _) => out.push(other),
        }
    }

    out
}
