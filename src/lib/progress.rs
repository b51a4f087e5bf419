//! Progress tracking utilities.
//!
//! Provides a thread-safe counter that logs a line each time the count
//! crosses an interval boundary. Stages share one tracker across workers
//! via `Arc`.

use std::sync::atomic::{AtomicU64, Ordering};

use log::info;

/// Thread-safe progress tracker logging at regular count intervals.
///
/// # Example
/// ```
/// use fapipe_lib::progress::ProgressTracker;
///
/// let tracker = ProgressTracker::new("Read sequences").with_interval(1000);
/// for _ in 0..2500 {
///     tracker.inc(1); // logs at 1000 and 2000
/// }
/// tracker.log_final(); // logs "Read sequences 2500 (complete)"
/// assert_eq!(tracker.count(), 2500);
/// ```
pub struct ProgressTracker {
    interval: u64,
    message: String,
    count: AtomicU64,
}

impl ProgressTracker {
    /// Creates a tracker with the given message prefix and the default
    /// interval of 100,000.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { interval: 100_000, message: message.into(), count: AtomicU64::new(0) }
    }

    /// Sets the interval between progress lines.
    #[must_use]
    pub fn with_interval(mut self, interval: u64) -> Self {
        self.interval = interval.max(1);
        self
    }

    /// Adds `additional` to the count, logging once per interval boundary
    /// crossed. Safe to call from any number of workers.
    pub fn inc(&self, additional: u64) {
        if additional == 0 {
            return;
        }
        let previous = self.count.fetch_add(additional, Ordering::Relaxed);
        let current = previous + additional;
        for boundary in (previous / self.interval + 1)..=(current / self.interval) {
            info!("{} {}", self.message, boundary * self.interval);
        }
    }

    /// Logs the final count unless the last `inc` already landed exactly
    /// on an interval boundary.
    pub fn log_final(&self) {
        let count = self.count.load(Ordering::Relaxed);
        if count > 0 && count % self.interval != 0 {
            info!("{} {} (complete)", self.message, count);
        }
    }

    /// The current count.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
