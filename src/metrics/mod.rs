//! Basic metrics instrumentation.
//!
//! Counts dispatched commands and weather provider calls. Clones share the
//! same counters, so the dispatcher and the HTTP client can report into one
//! collector.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for the assistant.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Commands dispatched
    commands_total: Arc<AtomicU64>,

    /// Commands that ended in an error message
    command_errors_total: Arc<AtomicU64>,

    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            commands_total: Arc::new(AtomicU64::new(0)),
            command_errors_total: Arc::new(AtomicU64::new(0)),
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a dispatched command and whether it failed.
    pub fn record_command(&self, failed: bool) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
        if failed {
            self.command_errors_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms();
        let count = self.http_requests_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total(),
            command_errors_total: self.command_errors_total(),
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub command_errors_total: u64,
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
}

/// Helper for timing HTTP requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing an HTTP request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}
