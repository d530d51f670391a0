//! Parallel bogosort race
//!
//! Several worker threads shuffle the digits of a number at random until one
//! of them happens upon a sorted (ascending or descending) permutation. The
//! first worker to get there stops everyone else; the coordinator then
//! reports how many shuffles the race took.

pub mod digits;
pub mod display;
pub mod error;
pub mod logging;
pub mod search;

pub use digits::Candidate;
pub use error::SearchError;
pub use search::{BogoSearch, RunStatistics, SearchConfig, run_search};
