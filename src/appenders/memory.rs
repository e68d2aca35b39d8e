//! In-memory log buffer
//!
//! Retains rendered lines for the lifetime of the logger, keyed by the tag the
//! caller used. Unbounded.

use crate::core::{Record, Result, Sink};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct MemoryAppender {
    entries: Vec<(String, String)>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines stored under `tag`, oldest first
    pub fn lines_for(&self, tag: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(t, _)| t == tag)
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// All lines grouped by tag
    pub fn grouped(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (tag, line) in &self.entries {
            grouped.entry(tag.clone()).or_default().push(line.clone());
        }
        grouped
    }

    /// Every (tag, line) pair in insertion order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Sink for MemoryAppender {
    fn append(&mut self, record: &Record<'_>) -> Result<()> {
        self.entries
            .push((record.tag.to_string(), record.line.to_string()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_keyed_and_ordered() {
        let mut memory = MemoryAppender::new();
        memory.append(&Record::new("info", Severity::Info, "a")).unwrap();
        memory.append(&Record::new("error", Severity::Err, "b")).unwrap();
        memory.append(&Record::new("info", Severity::Info, "c")).unwrap();

        assert_eq!(memory.lines_for("info"), vec!["a", "c"]);
        assert_eq!(memory.lines_for("error"), vec!["b"]);
        assert!(memory.lines_for("err").is_empty());

        let grouped = memory.grouped();
        assert_eq!(grouped.len(), 2);
        assert_eq!(memory.entries()[1], ("error".to_string(), "b".to_string()));

        memory.clear();
        assert!(memory.is_empty());
    }
}
