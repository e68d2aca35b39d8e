//! Structured logging backend
//!
//! An optional collaborator that receives every dispatched message, whatever
//! the local sink thresholds say. Its vocabulary is the eight syslog-style
//! severities; `debugv` folds onto `debug`.

use super::severity::Severity;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl BackendLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            BackendLevel::Emergency => "emergency",
            BackendLevel::Alert => "alert",
            BackendLevel::Critical => "critical",
            BackendLevel::Error => "error",
            BackendLevel::Warning => "warning",
            BackendLevel::Notice => "notice",
            BackendLevel::Info => "info",
            BackendLevel::Debug => "debug",
        }
    }

    /// Closest level of the `log` facade.
    pub fn to_log_level(&self) -> log::Level {
        match self {
            BackendLevel::Emergency
            | BackendLevel::Alert
            | BackendLevel::Critical
            | BackendLevel::Error => log::Level::Error,
            BackendLevel::Warning => log::Level::Warn,
            BackendLevel::Notice | BackendLevel::Info => log::Level::Info,
            BackendLevel::Debug => log::Level::Debug,
        }
    }
}

impl From<Severity> for BackendLevel {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Emerg => BackendLevel::Emergency,
            Severity::Alert => BackendLevel::Alert,
            Severity::Crit => BackendLevel::Critical,
            Severity::Err => BackendLevel::Error,
            Severity::Warning => BackendLevel::Warning,
            Severity::Notice => BackendLevel::Notice,
            Severity::Info => BackendLevel::Info,
            Severity::Debug | Severity::Debugv => BackendLevel::Debug,
        }
    }
}

impl fmt::Display for BackendLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

pub trait StructuredLogger: Send + Sync {
    fn log(&self, level: BackendLevel, message: &str);
}

impl<F> StructuredLogger for F
where
    F: Fn(BackendLevel, &str) + Send + Sync,
{
    fn log(&self, level: BackendLevel, message: &str) {
        self(level, message)
    }
}

/// Forwards to whatever logger is installed behind the `log` facade.
///
/// # Example
///
/// ```
/// use eggshell::prelude::*;
///
/// let logger = Logger::builder()
///     .options(Options::default().file(None::<String>).file_level(Severity::Emerg))
///     .backend(LogFacade::new())
///     .build()
///     .unwrap();
/// let _ = logger.notice("forwarded to the log facade", &[]);
/// ```
#[derive(Debug, Clone)]
pub struct LogFacade {
    target: String,
}

impl LogFacade {
    pub fn new() -> Self {
        Self::with_target("eggshell")
    }

    pub fn with_target(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl Default for LogFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredLogger for LogFacade {
    fn log(&self, level: BackendLevel, message: &str) {
        log::log!(target: self.target.as_str(), level.to_log_level(), "{}", message);
    }
}
