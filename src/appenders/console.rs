//! Console appender implementation

use crate::core::{Record, Result, Sink};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Live console output on stdout.
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colour whole lines by severity. Without the `console` feature this
    /// setting is ignored.
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    #[cfg(feature = "console")]
    fn paint(&self, record: &Record<'_>) -> String {
        match record.severity {
            Some(severity) if self.use_colors => {
                record.line.color(severity.color_code()).to_string()
            }
            _ => record.line.to_string(),
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, record: &Record<'_>) -> String {
        let _ = self.use_colors;
        record.line.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleAppender {
    fn append(&mut self, record: &Record<'_>) -> Result<()> {
        let output = self.paint(record);
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", output)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
