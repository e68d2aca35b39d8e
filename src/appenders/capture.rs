//! Capturing console replacement
//!
//! Collects what would have gone to the console so tests and embedding tools
//! can inspect it. Clones share the same buffer.

use crate::core::{Record, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// # Examples
///
/// ```
/// use eggshell::prelude::*;
///
/// let console = CaptureAppender::new();
/// let logger = Logger::builder()
///     .options(Options::default().file_level(Severity::Emerg))
///     .console(console.clone())
///     .build()
///     .unwrap();
///
/// let _ = logger.info("Deploying %s", &[Arg::from("v1.2")]);
/// assert!(console.lines()[0].ends_with("    Deploying 'v1.2'"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct CaptureAppender {
    lines: Arc<Mutex<Vec<String>>>,
}

impl CaptureAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Everything captured, one terminator per line, as a console would show it
    pub fn contents(&self) -> String {
        self.lines
            .lock()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl Sink for CaptureAppender {
    fn append(&mut self, record: &Record<'_>) -> Result<()> {
        self.lines.lock().push(record.line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "capture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_clones_share_buffer() {
        let capture = CaptureAppender::new();
        let mut writer = capture.clone();
        writer.append(&Record::new("info", Severity::Info, "one")).unwrap();
        writer.append(&Record::raw("two")).unwrap();

        assert_eq!(capture.lines(), vec!["one", "two"]);
        assert_eq!(capture.contents(), "one\ntwo\n");

        capture.clear();
        assert!(writer.lines().is_empty());
    }
}
