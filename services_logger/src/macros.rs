//! Submission macros
//!
//! Each macro takes a logger, a template literal and its arguments. The
//! arguments are converted with `LogArg::from` and the submission site's
//! `file!()` and `line!()` are recorded.

/// Logs at an explicit level
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $template:literal $(, $arg:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.submit(
                level,
                $template,
                ::std::vec![$($crate::LogArg::from($arg)),*],
                file!(),
                line!(),
            );
        }
    }};
}

/// Logs with TRACE severity
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Trace, $($rest)+)
    };
}

/// Logs with DEBUG severity
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Debug, $($rest)+)
    };
}

/// Logs with INFO severity
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Info, $($rest)+)
    };
}

/// Logs with WARN severity
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Warn, $($rest)+)
    };
}

/// Logs with ERROR severity
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Error, $($rest)+)
    };
}

/// Logs with FATAL severity
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log_at!($logger, $crate::LogLevel::Fatal, $($rest)+)
    };
}
