//! Live console readout of a running race
//!
//! Consumes `ObserverEvent`s on its own thread and redraws one line per worker
//! plus a totals line at a fixed interval. Updates that arrive between two
//! redraws are coalesced; only the latest candidate of each worker is shown.

use crate::search::{ObserverEvent, Progress};
use crossbeam_channel::{Receiver, RecvTimeoutError};
use crossterm::{
    cursor::MoveUp,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Longest candidate shown in full; longer ones are cut with an ellipsis.
const MAX_CANDIDATE_WIDTH: usize = 64;

/// Screen state for the live readout.
pub struct LiveView {
    latest: Vec<String>,
    progress: Arc<Progress>,
    winner: Option<usize>,
    lines_drawn: u16,
}

impl LiveView {
    pub fn new(input: &str, num_workers: usize, progress: Arc<Progress>) -> Self {
        Self {
            latest: vec![input.to_string(); num_workers],
            progress,
            winner: None,
            lines_drawn: 0,
        }
    }

    /// Apply one event. Returns true if it was the success event.
    pub fn apply(&mut self, event: ObserverEvent) -> bool {
        match event {
            ObserverEvent::Candidate {
                worker_id,
                candidate,
            } => {
                if let Some(slot) = self.latest.get_mut(worker_id) {
                    *slot = candidate;
                }
                false
            }
            ObserverEvent::Success {
                worker_id,
                candidate,
            } => {
                if let Some(slot) = self.latest.get_mut(worker_id) {
                    *slot = candidate;
                }
                self.winner = Some(worker_id);
                true
            }
        }
    }

    /// Lines of the current frame, without terminal control sequences.
    pub fn frame(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.latest.len() + 1);
        for (worker_id, candidate) in self.latest.iter().enumerate() {
            let marker = if self.winner == Some(worker_id) {
                "  <- sorted!"
            } else {
                ""
            };
            lines.push(format!(
                "Thread {:>3}: {}{}",
                worker_id,
                truncate(candidate, MAX_CANDIDATE_WIDTH),
                marker
            ));
        }

        let rate = self
            .progress
            .iterations_per_second()
            .map(|r| format!("{:.0}", r))
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!(
            "Total iterations: {} | Iterations per second: {} | Elapsed: {:.1?}",
            self.progress.total_iterations(),
            rate,
            self.progress.elapsed()
        ));
        lines
    }

    /// Draw the current frame over the previous one.
    pub fn render<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.lines_drawn > 0 {
            queue!(out, MoveUp(self.lines_drawn))?;
        }
        let frame = self.frame();
        for line in &frame {
            queue!(out, Clear(ClearType::CurrentLine))?;
            writeln!(out, "\r{}", line)?;
        }
        self.lines_drawn = u16::try_from(frame.len()).unwrap_or(u16::MAX);
        out.flush()
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        // Candidates are ASCII digits, so byte slicing is safe
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}

/// Run the readout on its own thread until every observer is dropped.
pub fn spawn_display(
    rx: Receiver<ObserverEvent>,
    mut view: LiveView,
    refresh: Duration,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("bogo-display".to_string())
        .spawn(move || {
            if let Err(e) = run_display(&rx, &mut view, refresh, &mut io::stdout()) {
                tracing::warn!(error = %e, "live display stopped");
                // Keep draining so workers never see a full channel
                for _ in rx.iter() {}
            }
        })
}

fn run_display<W: Write>(
    rx: &Receiver<ObserverEvent>,
    view: &mut LiveView,
    refresh: Duration,
    out: &mut W,
) -> io::Result<()> {
    let mut last_draw = Instant::now();
    view.render(out)?;

    loop {
        match rx.recv_timeout(refresh) {
            Ok(event) => {
                if view.apply(event) {
                    view.render(out)?;
                    last_draw = Instant::now();
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if last_draw.elapsed() >= refresh {
            view.render(out)?;
            last_draw = Instant::now();
        }
    }

    view.render(out)?;
    writeln!(out)
}
