//! Error types for input validation and worker startup

use std::io;
use thiserror::Error;

/// Errors surfaced by the search before or while starting workers.
///
/// Nothing inside the worker loop can fail once validation has passed, so
/// every variant is raised either before the first thread exists or while
/// threads are being spawned.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The number to sort was empty.
    #[error("input is empty, expected at least one digit")]
    EmptyInput,

    /// The number contained something other than `0`-`9`.
    #[error("invalid character {found:?} at position {position}, expected a decimal digit")]
    NonDigit { position: usize, found: char },

    /// Fewer than one worker was requested.
    #[error("invalid worker count {0}, at least one worker is required")]
    InvalidWorkerCount(i64),

    /// The OS refused to create a worker thread.
    #[error("failed to spawn worker {worker_id}: {source}")]
    Spawn {
        worker_id: usize,
        #[source]
        source: io::Error,
    },
}
