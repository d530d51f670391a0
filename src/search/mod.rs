//! The bogosort race
//!
//! Workers shuffle their own copy of the input until one of them sees a sorted
//! permutation, then everyone stops and the coordinator adds up the counts.
//! Progress reaches the outside world only through a `SearchObserver`.

pub mod config;
pub mod observer;
pub mod parallel;
pub mod result;

pub use config::SearchConfig;
pub use observer::{ChannelObserver, NullObserver, ObserverEvent, SearchObserver};
pub use parallel::{BogoSearch, Progress, StopSignal, run_search};
pub use result::{DurationBreakdown, RaceOutcome, RunStatistics, Winner};
