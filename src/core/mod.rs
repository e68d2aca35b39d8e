//! Core logger types and traits

pub mod arg;
pub mod backend;
pub mod error;
pub mod level;
pub mod line;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod severity;
pub mod sink;
pub mod template;
pub mod timestamp;
pub mod trace;

pub use arg::{Abbreviation, Arg};
pub use backend::{BackendLevel, LogFacade, StructuredLogger};
pub use error::{Conclusion, LoggerError, Result};
pub use level::Level;
pub use line::{LineKind, Shape};
pub use logger::{Clock, Logger, LoggerBuilder, Message};
pub use metrics::LoggerMetrics;
pub use options::{Options, DEFAULT_LOG_FILE};
pub use severity::Severity;
pub use sink::{Record, Sink};
pub use template::interpolate;
pub use timestamp::{DateFormat, BLANK_TIMESTAMP};
pub use trace::{BacktraceProbe, Frame, StackProbe};
