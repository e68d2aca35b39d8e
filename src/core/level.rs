//! Dispatch tags
//!
//! A tag names how a call was made: a rung of the ladder, the `error` alias,
//! one of the pseudo-levels, or a marker configured through [`Options`].
//!
//! [`Options`]: super::options::Options

use super::severity::Severity;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Level {
    Emerg,
    Alert,
    Crit,
    Err,
    /// Alias of [`Level::Err`] under the default configuration.
    Error,
    Warning,
    Notice,
    Info,
    Debug,
    Debugv,
    Trail,
    Stdout,
    Stderr,
    SectionOpen,
    SectionClose,
    /// Any other tag, e.g. a custom section marker.
    Custom(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Emerg => "emerg",
            Level::Alert => "alert",
            Level::Crit => "crit",
            Level::Err => "err",
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Notice => "notice",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Debugv => "debugv",
            Level::Trail => "trail",
            Level::Stdout => "stdout",
            Level::Stderr => "stderr",
            Level::SectionOpen => "section_open",
            Level::SectionClose => "section_close",
            Level::Custom(tag) => tag,
        }
    }

    /// The ladder rung this tag names directly, if any.
    pub fn severity(&self) -> Option<Severity> {
        self.as_str().parse().ok()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Emerg => Level::Emerg,
            Severity::Alert => Level::Alert,
            Severity::Crit => Level::Crit,
            Severity::Err => Level::Err,
            Severity::Warning => Level::Warning,
            Severity::Notice => Level::Notice,
            Severity::Info => Level::Info,
            Severity::Debug => Level::Debug,
            Severity::Debugv => Level::Debugv,
        }
    }
}

impl From<&str> for Level {
    fn from(tag: &str) -> Self {
        match tag {
            "emerg" => Level::Emerg,
            "alert" => Level::Alert,
            "crit" => Level::Crit,
            "err" => Level::Err,
            "error" => Level::Error,
            "warning" => Level::Warning,
            "notice" => Level::Notice,
            "info" => Level::Info,
            "debug" => Level::Debug,
            "debugv" => Level::Debugv,
            "trail" => Level::Trail,
            "stdout" => Level::Stdout,
            "stderr" => Level::Stderr,
            "section_open" => Level::SectionOpen,
            "section_close" => Level::SectionClose,
            other => Level::Custom(other.to_string()),
        }
    }
}

impl From<String> for Level {
    fn from(tag: String) -> Self {
        Level::from(tag.as_str())
    }
}
