//! Race result types and statistics

use crate::digits::{Candidate, SortDirection};
use std::fmt;
use std::time::Duration;

/// The worker that found a sorted permutation first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Winner {
    pub worker_id: usize,
    /// The sorted permutation it found.
    pub candidate: Candidate,
    /// Iterations that worker ran, including the winning one.
    pub iterations: u64,
}

/// How a race ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceOutcome {
    /// The input was sorted to begin with; no workers ran.
    AlreadySorted(SortDirection),
    /// A worker found a sorted permutation.
    Solved(Winner),
    /// The race was stopped from outside before anyone won.
    Interrupted,
}

/// Snapshot of a finished race.
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// The number that was raced on
    pub input: Candidate,
    pub outcome: RaceOutcome,
    /// Iterations per worker, indexed by worker id
    pub tally: Vec<u64>,
    /// Wall-clock time between spawning the first worker and joining the last
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Statistics for input that needed no search at all.
    pub fn already_sorted(input: Candidate, direction: SortDirection) -> Self {
        Self {
            input,
            outcome: RaceOutcome::AlreadySorted(direction),
            tally: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_race(
        input: Candidate,
        outcome: RaceOutcome,
        tally: Vec<u64>,
        elapsed: Duration,
    ) -> Self {
        Self {
            input,
            outcome,
            tally,
            elapsed,
        }
    }

    pub fn num_workers(&self) -> usize {
        self.tally.len()
    }

    pub fn winner(&self) -> Option<&Winner> {
        match &self.outcome {
            RaceOutcome::Solved(winner) => Some(winner),
            _ => None,
        }
    }

    pub fn total_iterations(&self) -> u64 {
        self.tally.iter().sum()
    }

    /// Mean iterations per worker (0.0 when no workers ran)
    pub fn mean_iterations(&self) -> f64 {
        if self.tally.is_empty() {
            0.0
        } else {
            self.total_iterations() as f64 / self.tally.len() as f64
        }
    }

    /// Iterations per second across all workers.
    ///
    /// `None` when no measurable time elapsed.
    pub fn iterations_per_second(&self) -> Option<f64> {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            None
        } else {
            Some(self.total_iterations() as f64 / secs)
        }
    }

    pub fn iterations_per_second_per_worker(&self) -> Option<f64> {
        if self.tally.is_empty() {
            return None;
        }
        self.iterations_per_second()
            .map(|rate| rate / self.tally.len() as f64)
    }

    /// Format statistics as the end-of-run report
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str("=======================================\n");
        s.push_str(&format!(
            "Total iterations for all threads: {}\n",
            self.total_iterations()
        ));
        s.push_str(&format!(
            "Average iterations per thread: {:.2}\n",
            self.mean_iterations()
        ));
        s.push_str(&format!(
            "Average iterations per second: {}\n",
            format_rate(self.iterations_per_second())
        ));
        s.push_str(&format!(
            "Average iterations per second per thread: {}\n",
            format_rate(self.iterations_per_second_per_worker())
        ));
        s.push_str(&format!(
            "Total time: {}\n",
            DurationBreakdown::from(self.elapsed)
        ));
        s.push_str("=======================================\n");
        s
    }
}

fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.2}", rate),
        None => "n/a (no measurable time elapsed)".to_string(),
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            RaceOutcome::AlreadySorted(direction) => {
                return writeln!(f, "The number is sorted ({})", direction);
            }
            RaceOutcome::Solved(winner) => {
                writeln!(
                    f,
                    "Thread {} found the sorted number: {} after {} iterations.",
                    winner.worker_id, winner.candidate, winner.iterations
                )?;
            }
            RaceOutcome::Interrupted => {
                writeln!(f, "Search stopped before any thread found a sorted number.")?;
            }
        }
        writeln!(f)?;
        write!(f, "{}", self.format_summary())
    }
}

/// A duration split into hour, minute, second, milli-, micro- and
/// nanosecond components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationBreakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub milliseconds: u32,
    pub microseconds: u32,
    pub nanoseconds: u32,
}

impl From<Duration> for DurationBreakdown {
    fn from(duration: Duration) -> Self {
        let total_secs = duration.as_secs();
        let nanos = duration.subsec_nanos();
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
            milliseconds: nanos / 1_000_000,
            microseconds: (nanos / 1_000) % 1_000,
            nanoseconds: nanos % 1_000,
        }
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}h {}m {}s {}ms {}us {}ns",
            self.hours,
            self.minutes,
            self.seconds,
            self.milliseconds,
            self.microseconds,
            self.nanoseconds
        )
    }
}
