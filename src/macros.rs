//! Logging macros
//!
//! Each macro converts its trailing arguments with [`Arg::from`] and passes
//! them on, so callers need not build the argument slice by hand.
//!
//! # Examples
//!
//! ```
//! use eggshell::prelude::*;
//! use eggshell::{info, section_open};
//!
//! let logger = Logger::with_options(
//!     Options::default().file(None::<String>).file_level(Severity::Emerg),
//! )
//! .unwrap();
//!
//! section_open!(logger, "Deploy").unwrap();
//! let host = "db1";
//! info!(logger, "Connected to %s on port %d", host, 5432).unwrap();
//! ```
//!
//! [`Arg::from`]: crate::Arg

/// Build an argument array for [`Logger::dispatch`](crate::Logger::dispatch).
///
/// ```
/// use eggshell::{args, Arg};
///
/// let list = args!["a", 1, true];
/// assert_eq!(list[1], Arg::Int(1));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        [$($crate::Arg::from($arg)),*]
    };
}

/// Log under any tag.
///
/// ```
/// # use eggshell::prelude::*;
/// # let logger = Logger::with_options(Options::default().file(None::<String>).file_level(Severity::Emerg).break_level(Severity::Emerg)).unwrap();
/// use eggshell::log;
/// log!(logger, "notice", "Simple message").unwrap();
/// log!(logger, Severity::Err, "Error code: %d", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $logger.log($level, $format, &$crate::args![$($arg),*])
    };
}

#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Emerg, $($rest)+)
    };
}

#[macro_export]
macro_rules! alert {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Alert, $($rest)+)
    };
}

#[macro_export]
macro_rules! crit {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Crit, $($rest)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use eggshell::prelude::*;
/// # let logger = Logger::with_options(Options::default().file(None::<String>).file_level(Severity::Emerg).break_level(Severity::Emerg)).unwrap();
/// use eggshell::err;
/// err!(logger, "Lost connection to %s", "db1").unwrap();
/// ```
#[macro_export]
macro_rules! err {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Err, $($rest)+)
    };
}

/// Log through the `error` alias.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($rest)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($rest)+)
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($rest)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use eggshell::prelude::*;
/// # let logger = Logger::with_options(Options::default().file(None::<String>).file_level(Severity::Emerg)).unwrap();
/// use eggshell::info;
/// info!(logger, "Application started").unwrap();
/// info!(logger, "Processing %d items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($rest)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($rest)+)
    };
}

#[macro_export]
macro_rules! debugv {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Debugv, $($rest)+)
    };
}

#[macro_export]
macro_rules! trail {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Trail, $($rest)+)
    };
}

#[macro_export]
macro_rules! stdout {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Stdout, $($rest)+)
    };
}

#[macro_export]
macro_rules! stderr {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::Stderr, $($rest)+)
    };
}

#[macro_export]
macro_rules! section_open {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::SectionOpen, $($rest)+)
    };
}

#[macro_export]
macro_rules! section_close {
    ($logger:expr, $($rest:tt)+) => {
        $crate::log!($logger, $crate::Level::SectionClose, $($rest)+)
    };
}
