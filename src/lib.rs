//! # Eggshell
//!
//! A leveled logger for command line tools that run on the operator's
//! terminal and leave a file behind.
//!
//! Each call carries a tag. Tags on the syslog ladder (`emerg` through
//! `debugv`) are checked against independent thresholds for the console,
//! the log file and an in-memory buffer. Pseudo-levels frame output:
//! section headings, captured child `stdout`/`stderr`, and `trail` lines.
//! Anything at or above the halt threshold writes a call trace and comes
//! back as [`LoggerError::Halt`], which the binary turns into an exit.
//!
//! ## Example
//!
//! ```
//! use eggshell::prelude::*;
//!
//! let logger = Logger::with_options(
//!     Options::default().file(None::<String>).file_level(Severity::Emerg),
//! )
//! .unwrap();
//!
//! logger.section_open("Backup", &[]).unwrap();
//! logger.info("Copied %d files to %s", &[Arg::from(12), Arg::from("/srv/backup")]).unwrap();
//! assert_eq!(logger.memory_for("info").len(), 1);
//! ```
//!
//! ## Features
//!
//! - `console` (default): colored console lines via `colored`
//! - `file` (default): exclusive `fs2` locks around log file appends

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{CaptureAppender, ConsoleAppender, FileAppender, MemoryAppender};
    pub use crate::core::{
        Abbreviation, Arg, BackendLevel, BacktraceProbe, Conclusion, DateFormat, Frame, Level,
        LogFacade, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Message, Options, Record,
        Result, Severity, Sink, StackProbe, StructuredLogger,
    };
}

pub use appenders::{CaptureAppender, ConsoleAppender, FileAppender, MemoryAppender};
pub use core::{
    Abbreviation, Arg, BackendLevel, BacktraceProbe, Conclusion, DateFormat, Frame, Level,
    LogFacade, Logger, LoggerBuilder, LoggerError, LoggerMetrics, Message, Options, Record, Result,
    Severity, Sink, StackProbe, StructuredLogger,
};
