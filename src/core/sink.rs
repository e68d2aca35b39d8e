//! Sink trait for line output destinations

use super::{error::Result, severity::Severity};

/// A rendered line on its way to a sink.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Tag the caller used, before alias resolution
    pub tag: &'a str,
    /// Severity used for threshold checks; `None` for raw output
    pub severity: Option<Severity>,
    pub line: &'a str,
}

impl<'a> Record<'a> {
    pub fn new(tag: &'a str, severity: Severity, line: &'a str) -> Self {
        Self {
            tag,
            severity: Some(severity),
            line,
        }
    }

    /// Output that bypasses the ladder, e.g. trace dumps.
    pub fn raw(line: &'a str) -> Self {
        Self {
            tag: "",
            severity: None,
            line,
        }
    }
}

pub trait Sink: Send {
    /// Write one line; the sink adds the line terminator.
    fn append(&mut self, record: &Record<'_>) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
