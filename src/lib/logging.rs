//! Formatting helpers for log output.

use std::time::{Duration, Instant};

/// Formats a count with thousands separators.
///
/// # Examples
///
/// ```
/// use fapipe_lib::logging::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a duration as seconds/minutes/hours.
///
/// # Examples
///
/// ```
/// use fapipe_lib::logging::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_secs(45)), "45s");
/// assert_eq!(format_duration(Duration::from_secs(135)), "2m 15s");
/// assert_eq!(format_duration(Duration::from_secs(5400)), "1h 30m");
/// ```
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{secs}s")
    } else if secs < 3600 {
        let mins = secs / 60;
        let rest = secs % 60;
        if rest == 0 { format!("{mins}m") } else { format!("{mins}m {rest}s") }
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        if mins == 0 { format!("{hours}h") } else { format!("{hours}h {mins}m") }
    }
}

/// Formats a processing rate in records per second.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn format_rate(count: u64, duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs < 0.001 {
        return format!("{} records/s", format_count(count));
    }
    format!("{} records/s", format_count((count as f64 / secs) as u64))
}

/// Operation timing helper: logs the start on construction and a
/// formatted completion line on demand.
///
/// # Example
///
/// ```no_run
/// use fapipe_lib::logging::OperationTimer;
///
/// let timer = OperationTimer::new("Filtering sequences");
/// // ... run the pipeline ...
/// timer.log_completion(10_000);
/// ```
pub struct OperationTimer {
    operation: String,
    start: Instant,
}

impl OperationTimer {
    /// Creates a timer and logs that the operation started.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        log::info!("{operation} ...");
        Self { operation: operation.to_string(), start: Instant::now() }
    }

    /// Logs completion with the record count, elapsed time, and rate.
    pub fn log_completion(&self, count: u64) {
        let elapsed = self.start.elapsed();
        log::info!(
            "{} completed: {} records in {} ({})",
            self.operation,
            format_count(count),
            format_duration(elapsed),
            format_rate(count, elapsed)
        );
    }
}
