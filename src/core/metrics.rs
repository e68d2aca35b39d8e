//! Logger metrics for observability
//!
//! Counters for how many events were dispatched and which sinks they reached.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-sink counters
///
/// # Example
///
/// ```
/// use eggshell::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_dispatched();
/// metrics.record_printed();
///
/// assert_eq!(metrics.dispatched(), 1);
/// assert_eq!(metrics.printed(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Single-line events that went through the pipeline
    dispatched: AtomicU64,

    /// Lines retained in memory
    memory_appended: AtomicU64,

    /// Lines written to the console
    printed: AtomicU64,

    /// Lines appended to the log file
    file_written: AtomicU64,

    /// Messages handed to the structured backend
    backend_forwarded: AtomicU64,

    /// Console or file writes that failed
    sink_failures: AtomicU64,

    /// Halt dumps performed
    halts: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            dispatched: AtomicU64::new(0),
            memory_appended: AtomicU64::new(0),
            printed: AtomicU64::new(0),
            file_written: AtomicU64::new(0),
            backend_forwarded: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            halts: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn memory_appended(&self) -> u64 {
        self.memory_appended.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn printed(&self) -> u64 {
        self.printed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_written(&self) -> u64 {
        self.file_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn backend_forwarded(&self) -> u64 {
        self.backend_forwarded.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn halts(&self) -> u64 {
        self.halts.load(Ordering::Relaxed)
    }

    /// Record a dispatched event; returns the previous count
    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_memory(&self) -> u64 {
        self.memory_appended.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_printed(&self) -> u64 {
        self.printed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file(&self) -> u64 {
        self.file_written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_backend(&self) -> u64 {
        self.backend_forwarded.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_halt(&self) -> u64 {
        self.halts.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of sink writes that failed, as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.sink_failures() as f64;
        let total = (self.printed() + self.file_written()) as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.dispatched.store(0, Ordering::Relaxed);
        self.memory_appended.store(0, Ordering::Relaxed);
        self.printed.store(0, Ordering::Relaxed);
        self.file_written.store(0, Ordering::Relaxed);
        self.backend_forwarded.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.halts.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            dispatched: AtomicU64::new(self.dispatched()),
            memory_appended: AtomicU64::new(self.memory_appended()),
            printed: AtomicU64::new(self.printed()),
            file_written: AtomicU64::new(self.file_written()),
            backend_forwarded: AtomicU64::new(self.backend_forwarded()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            halts: AtomicU64::new(self.halts()),
        }
    }
}
