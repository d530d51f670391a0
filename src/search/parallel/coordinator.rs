//! Race coordinator that spawns the workers and aggregates their counts.

use crate::digits::Candidate;
use crate::error::SearchError;
use crate::search::config::SearchConfig;
use crate::search::observer::{NullObserver, SearchObserver};
use crate::search::parallel::signal::{Progress, StopSignal};
use crate::search::parallel::tally::IterationTally;
use crate::search::parallel::worker::{WorkerContext, WorkerReport, run_worker};
use crate::search::result::{RaceOutcome, RunStatistics, Winner};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;
use tracing::{error, info};

/// A single bogosort race.
///
/// The stop signal and progress counters are created up front so callers can
/// hand them to an interrupt handler or a display before the race starts. The
/// stop signal stays set once the race is over, so each `BogoSearch` runs one
/// race.
pub struct BogoSearch {
    config: SearchConfig,
    stop: Arc<StopSignal>,
    progress: Arc<Progress>,
}

impl BogoSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            stop: Arc::new(StopSignal::new()),
            progress: Arc::new(Progress::new()),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Handle for cancelling the race from outside, e.g. on Ctrl-C.
    pub fn stop_signal(&self) -> Arc<StopSignal> {
        Arc::clone(&self.stop)
    }

    /// Live totals for throughput display.
    pub fn progress(&self) -> Arc<Progress> {
        Arc::clone(&self.progress)
    }

    /// Validate `input`, race the workers, and block until all of them stop.
    ///
    /// Already sorted input returns immediately without spawning anything.
    pub fn run(
        &self,
        input: &str,
        observer: Arc<dyn SearchObserver>,
    ) -> Result<RunStatistics, SearchError> {
        let candidate = Candidate::parse(input)?;
        let num_workers = self.config.num_workers;
        if num_workers == 0 {
            return Err(SearchError::InvalidWorkerCount(0));
        }

        if let Some(direction) = candidate.direction() {
            info!(number = %candidate, %direction, "input already sorted, no search needed");
            return Ok(RunStatistics::already_sorted(candidate, direction));
        }

        let input = Arc::new(candidate);
        let tally = Arc::new(IterationTally::new(num_workers));

        info!(
            number = %input,
            workers = num_workers,
            seed = ?self.config.base_seed,
            "Starting {} threads to find the sorted number.",
            num_workers
        );

        let start_time = Instant::now();
        self.progress.mark_started(start_time);

        let ctx = WorkerContext {
            input: Arc::clone(&input),
            stop: Arc::clone(&self.stop),
            tally: Arc::clone(&tally),
            progress: Arc::clone(&self.progress),
            observer,
            progress_batch: self.config.progress_batch,
        };

        let mut handles: Vec<JoinHandle<WorkerReport>> = Vec::with_capacity(num_workers);
        for worker_id in 0..num_workers {
            match self.spawn_worker(worker_id, ctx.clone()) {
                Ok(handle) => handles.push(handle),
                Err(source) => {
                    error!(worker_id, %source, "failed to spawn worker, aborting race");
                    self.stop.trigger();
                    join_all(handles);
                    return Err(SearchError::Spawn { worker_id, source });
                }
            }
        }
        drop(ctx);

        let reports = join_all(handles);
        let elapsed = start_time.elapsed();

        let outcome = reports
            .into_iter()
            .find_map(|report| {
                report.solution.map(|candidate| Winner {
                    worker_id: report.worker_id,
                    candidate,
                    iterations: report.iterations,
                })
            })
            .map(RaceOutcome::Solved)
            .unwrap_or(RaceOutcome::Interrupted);

        let statistics = RunStatistics::from_race(
            Arc::unwrap_or_clone(input),
            outcome,
            tally.counts(),
            elapsed,
        );

        info!(
            total_iterations = statistics.total_iterations(),
            elapsed = ?statistics.elapsed,
            solved = statistics.winner().is_some(),
            "race finished"
        );

        Ok(statistics)
    }

    fn spawn_worker(
        &self,
        worker_id: usize,
        ctx: WorkerContext,
    ) -> std::io::Result<JoinHandle<WorkerReport>> {
        let seed = self.config.worker_seed(worker_id);

        thread::Builder::new()
            .name(format!("bogo-worker-{}", worker_id))
            .spawn(move || {
                let mut rng = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_os_rng(),
                };
                run_worker(worker_id, &ctx, &mut rng)
            })
    }
}

/// Wait for every worker, including the ones that lost the race.
fn join_all(handles: Vec<JoinHandle<WorkerReport>>) -> Vec<WorkerReport> {
    let mut reports = Vec::with_capacity(handles.len());
    for handle in handles {
        match handle.join() {
            Ok(report) => reports.push(report),
            Err(_) => error!("worker thread panicked"),
        }
    }
    reports
}

/// Race `worker_count` workers on `input` without any observer.
pub fn run_search(input: &str, worker_count: usize) -> Result<RunStatistics, SearchError> {
    BogoSearch::new(SearchConfig::default().with_workers(worker_count))
        .run(input, Arc::new(NullObserver))
}
