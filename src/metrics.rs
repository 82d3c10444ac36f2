//! Session statistics for the interactive forecaster.

use std::time::{Duration, Instant};
use tracing::info;

/// Tracks predictions made during one interactive session
pub struct SessionStats {
    predictions: u64,
    failures: u64,
    /// Prediction latencies (in microseconds)
    latencies_us: Vec<u64>,
    start_time: Instant,
}

impl SessionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self {
            predictions: 0,
            failures: 0,
            latencies_us: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Record a successful prediction
    pub fn record_prediction(&mut self, latency: Duration) {
        self.predictions += 1;
        self.latencies_us.push(latency.as_micros() as u64);
    }

    /// Record a failed prediction attempt
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    pub fn predictions(&self) -> u64 {
        self.predictions
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Mean prediction latency in microseconds
    pub fn mean_latency_us(&self) -> u64 {
        if self.latencies_us.is_empty() {
            return 0;
        }
        self.latencies_us.iter().sum::<u64>() / self.latencies_us.len() as u64
    }

    /// Maximum prediction latency in microseconds
    pub fn max_latency_us(&self) -> u64 {
        self.latencies_us.iter().copied().max().unwrap_or(0)
    }

    /// Log the end-of-session summary
    pub fn print_summary(&self) {
        info!(
            predictions = self.predictions,
            failures = self.failures,
            mean_latency_us = self.mean_latency_us(),
            max_latency_us = self.max_latency_us(),
            session_secs = self.start_time.elapsed().as_secs(),
            "Session summary"
        );
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
