//! The shuffle-and-test loop each worker thread runs.

use crate::digits::Candidate;
use crate::search::observer::SearchObserver;
use crate::search::parallel::signal::{Progress, StopSignal};
use crate::search::parallel::tally::IterationTally;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything a worker shares with the coordinator and its peers.
#[derive(Clone)]
pub struct WorkerContext {
    /// The number being sorted. Never mutated; each worker shuffles a copy.
    pub input: Arc<Candidate>,
    pub stop: Arc<StopSignal>,
    pub tally: Arc<IterationTally>,
    pub progress: Arc<Progress>,
    pub observer: Arc<dyn SearchObserver>,
    /// Local iterations accumulated before updating `progress`.
    pub progress_batch: u64,
}

/// What a worker hands back when it stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub iterations: u64,
    /// The sorted candidate, present only for the worker that won the race.
    pub solution: Option<Candidate>,
}

/// Shuffle a private copy of the input until it is sorted or the race is over.
///
/// The stop signal is checked before every iteration, so a worker runs at
/// most the iteration already in flight after another worker wins. When two
/// workers hit a sorted permutation at the same time only the one whose
/// `trigger` succeeds reports success.
pub fn run_worker<R: Rng + ?Sized>(
    worker_id: usize,
    ctx: &WorkerContext,
    rng: &mut R,
) -> WorkerReport {
    debug!(worker_id, "worker started");

    let batch = ctx.progress_batch.max(1);
    let mut candidate = ctx.input.as_ref().clone();
    let mut iterations: u64 = 0;
    let mut unflushed: u64 = 0;
    let mut solution = None;

    while !ctx.stop.is_set() {
        candidate.shuffle(rng);
        iterations += 1;
        unflushed += 1;

        ctx.observer.on_candidate_update(worker_id, candidate.as_str());

        if unflushed >= batch {
            ctx.progress.add_iterations(unflushed);
            unflushed = 0;
        }

        if candidate.is_sorted() {
            if ctx.stop.trigger() {
                info!(
                    worker_id,
                    iterations,
                    number = %candidate,
                    "Thread {} found the sorted number: {} after {} iterations.",
                    worker_id,
                    candidate,
                    iterations
                );
                ctx.observer.on_success(worker_id, candidate.as_str());
                solution = Some(candidate);
            }
            break;
        }
    }

    ctx.progress.add_iterations(unflushed);

    if !ctx.tally.record(worker_id, iterations) {
        warn!(worker_id, iterations, "tally slot already written or missing");
    }

    debug!(worker_id, iterations, won = solution.is_some(), "worker stopped");

    WorkerReport {
        worker_id,
        iterations,
        solution,
    }
}
