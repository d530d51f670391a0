//! Configuration for a bogosort race

/// How many workers to run and how they seed their random number generators.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of worker threads to spawn.
    pub num_workers: usize,
    /// Base random seed (workers get seed + worker_id). `None` seeds from the OS.
    pub base_seed: Option<u64>,
    /// How many local iterations a worker batches before adding them to the
    /// shared progress counter.
    pub progress_batch: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            num_workers: num_cpus::get(),
            base_seed: None,
            progress_batch: 256,
        }
    }
}

impl SearchConfig {
    /// Set the number of workers. Zero is rejected when the search starts.
    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    /// Set the base random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.base_seed = seed;
        self
    }

    pub fn with_progress_batch(mut self, batch: u64) -> Self {
        self.progress_batch = batch.max(1);
        self
    }

    /// Seed for a given worker, if the run is seeded.
    pub fn worker_seed(&self, worker_id: usize) -> Option<u64> {
        self.base_seed.map(|s| s.wrapping_add(worker_id as u64))
    }
}
