//! Parallel race between bogosort workers.
//!
//! # Architecture
//!
//! - A **coordinator** (`BogoSearch`) validates the input, spawns the workers,
//!   joins them and aggregates their counts
//! - Multiple **workers** that shuffle private copies of the input
//! - A **stop signal** that the first worker with a sorted candidate (or an
//!   interrupt handler) sets to end the race
//! - An **iteration tally** behind one mutex, written once per worker on exit
//!
//! # Example
//!
//! ```ignore
//! let search = BogoSearch::new(SearchConfig::default().with_workers(4));
//! let stop = search.stop_signal(); // hand to a Ctrl-C handler
//! let stats = search.run("31415", Arc::new(NullObserver))?;
//! ```

pub mod coordinator;
pub mod signal;
pub mod tally;
pub mod worker;

pub use coordinator::{BogoSearch, run_search};
pub use signal::{Progress, StopSignal};
