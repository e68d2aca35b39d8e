//! Error types for the logger

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Outcome sentinel returned by every dispatch.
///
/// A dispatch that did its work yields [`Conclusion::Fail`], so a call site can
/// bail out with `return logger.err(...)`. Fan-out calls and a disabled
/// [`mark`](super::logger::Logger::mark) yield [`Conclusion::Skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conclusion {
    Fail,
    Skip,
    Okay,
}

impl Conclusion {
    pub fn to_str(&self) -> &'static str {
        match self {
            Conclusion::Fail => "Fail",
            Conclusion::Skip => "Skip",
            Conclusion::Okay => "Okay",
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Conclusion::Okay)
    }
}

impl fmt::Display for Conclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl From<Option<bool>> for Conclusion {
    fn from(result: Option<bool>) -> Self {
        match result {
            Some(true) => Conclusion::Okay,
            Some(false) => Conclusion::Fail,
            None => Conclusion::Skip,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Tag that is neither a severity, an alias nor a known marker
    #[error("Unknown log level '{tag}'")]
    UnknownLevel { tag: String },

    /// File sink asked to write before a log file was configured
    #[error("Error occured before log-file was set: {line}")]
    MissingLogFile { line: String },

    /// Halt threshold reached; the trace has already been dumped
    #[error("Process halt (exit status {status}), triggered by: {trigger}")]
    Halt { status: i32, trigger: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn unknown_level(tag: impl Into<String>) -> Self {
        LoggerError::UnknownLevel { tag: tag.into() }
    }

    pub fn missing_log_file(line: impl Into<String>) -> Self {
        LoggerError::MissingLogFile { line: line.into() }
    }

    pub fn halt(trigger: impl Into<String>) -> Self {
        LoggerError::Halt {
            status: 1,
            trigger: trigger.into(),
        }
    }

    /// Whether this error means the process is expected to stop.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LoggerError::MissingLogFile { .. } | LoggerError::Halt { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            LoggerError::Halt { status, .. } => *status,
            _ => 1,
        }
    }

    /// End the process for this error.
    ///
    /// A halt has already written its trace through the sinks, so only the
    /// other errors are reported on stderr first.
    pub fn terminate(self) -> ! {
        if !matches!(self, LoggerError::Halt { .. }) {
            eprintln!("{}", self);
        }
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("Options", "empty trail level");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(!err.is_fatal());

        let err = LoggerError::missing_log_file("    info 10:00:00    hello");
        assert!(err.is_fatal());
        assert_eq!(err.exit_code(), 1);

        let err = LoggerError::halt("boom");
        assert!(err.is_fatal());
        assert!(matches!(err, LoggerError::Halt { status: 1, .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::missing_log_file("line");
        assert_eq!(err.to_string(), "Error occured before log-file was set: line");

        let err = LoggerError::unknown_level("loud");
        assert_eq!(err.to_string(), "Unknown log level 'loud'");

        let err = LoggerError::config("Options", "bad date");
        assert_eq!(err.to_string(), "Invalid configuration for Options: bad date");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("appending to log file", "/var/log/egg.log", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("appending to log file"));
    }

    #[test]
    fn test_conclusion() {
        assert_eq!(Conclusion::from(Some(false)), Conclusion::Fail);
        assert_eq!(Conclusion::from(None), Conclusion::Skip);
        assert_eq!(Conclusion::from(Some(true)), Conclusion::Okay);
        assert_eq!(Conclusion::Skip.to_string(), "Skip");
        assert!(!Conclusion::Fail.is_ok());
    }
}
