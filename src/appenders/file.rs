//! File appender implementation
//!
//! The file is opened for every line and closed again before returning, so no
//! descriptor outlives a dispatch. Appends rely on `O_APPEND` semantics; with
//! the `file` feature an exclusive lock is held while writing.

use crate::core::{LoggerError, Record, Result, Sink};
#[cfg(feature = "file")]
use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct FileAppender {
    path: PathBuf,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut output = String::with_capacity(line.len() + 1);
        output.push_str(line);
        output.push('\n');

        write_locked(&mut file, output.as_bytes())
    }
}

#[cfg(feature = "file")]
fn write_locked(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.lock_exclusive()?;
    let result = file.write_all(bytes);
    let _ = FileExt::unlock(&*file);
    result
}

#[cfg(not(feature = "file"))]
fn write_locked(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes)
}

impl Sink for FileAppender {
    fn append(&mut self, record: &Record<'_>) -> Result<()> {
        self.write_line(record.line).map_err(|e| {
            LoggerError::io_operation(
                "appending to log file",
                self.path.display().to_string(),
                e,
            )
        })
    }

    fn flush(&mut self) -> Result<()> {
        // Nothing is buffered between appends.
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}
