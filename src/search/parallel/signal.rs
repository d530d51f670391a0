//! Shared state read by every worker in the race.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Process-wide stop flag.
///
/// Starts out clear and is set at most once: the first call to `trigger`
/// flips it, every later call is a no-op that reports it lost the race.
#[derive(Debug, Default)]
pub struct StopSignal {
    stopped: AtomicBool,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if workers should stop.
    pub fn is_set(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// Set the flag. Returns true if this call was the one that set it.
    pub fn trigger(&self) -> bool {
        self.stopped
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

/// Running totals for live throughput display.
///
/// Workers add their iterations in batches, so `total_iterations` trails the
/// true count by at most one batch per worker until the race ends.
#[derive(Debug, Default)]
pub struct Progress {
    started_at: OnceLock<Instant>,
    total_iterations: AtomicU64,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record when the race started. Only the first call has any effect.
    pub fn mark_started(&self, at: Instant) {
        let _ = self.started_at.set(at);
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at.get().copied()
    }

    /// Time since the race started, zero before it starts.
    pub fn elapsed(&self) -> Duration {
        self.started_at()
            .map(|start| start.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    pub fn add_iterations(&self, count: u64) {
        if count > 0 {
            self.total_iterations.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub fn total_iterations(&self) -> u64 {
        self.total_iterations.load(Ordering::Relaxed)
    }

    /// Current iterations per second, `None` until any time has passed.
    pub fn iterations_per_second(&self) -> Option<f64> {
        let secs = self.elapsed().as_secs_f64();
        if secs == 0.0 {
            None
        } else {
            Some(self.total_iterations() as f64 / secs)
        }
    }
}
