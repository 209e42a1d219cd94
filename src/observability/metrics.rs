//! Invocation counters
//!
//! - Counters only, monotonic, reset on process start
//! - Thread-safe via relaxed atomics

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for tool calls handled by one process
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    calls_received: AtomicU64,
    calls_answered: AtomicU64,
    absent_results: AtomicU64,
    calls_rejected: AtomicU64,
    calls_failed: AtomicU64,
}

impl MetricsRegistry {
    /// Create a registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a received call
    pub fn increment_received(&self) {
        self.calls_received.fetch_add(1, Ordering::Relaxed);
    }

    /// Count an answered call; `absent` marks an absent result
    pub fn record_answered(&self, absent: bool) {
        self.calls_answered.fetch_add(1, Ordering::Relaxed);
        if absent {
            self.absent_results.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Count a call rejected at the boundary
    pub fn increment_rejected(&self) {
        self.calls_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Count a call that failed reading the roster
    pub fn increment_failed(&self) {
        self.calls_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            calls_received: self.calls_received.load(Ordering::Relaxed),
            calls_answered: self.calls_answered.load(Ordering::Relaxed),
            absent_results: self.absent_results.load(Ordering::Relaxed),
            calls_rejected: self.calls_rejected.load(Ordering::Relaxed),
            calls_failed: self.calls_failed.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub calls_received: u64,
    pub calls_answered: u64,
    pub absent_results: u64,
    pub calls_rejected: u64,
    pub calls_failed: u64,
}

impl MetricsSnapshot {
    /// Counters as log fields
    pub fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("calls_received", self.calls_received.to_string()),
            ("calls_answered", self.calls_answered.to_string()),
            ("absent_results", self.absent_results.to_string()),
            ("calls_rejected", self.calls_rejected.to_string()),
            ("calls_failed", self.calls_failed.to_string()),
        ]
    }
}
