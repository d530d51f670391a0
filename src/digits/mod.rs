//! Digit strings and the two operations the race is built from
//!
//! - `Candidate`: a validated string of decimal digits, shuffled in place
//! - `shuffle`: uniform random permutation of a candidate
//! - `order`: the sortedness oracle (ascending or descending)

pub mod candidate;
pub mod order;
pub mod shuffle;

pub use candidate::Candidate;
pub use order::{SortDirection, is_sorted, sort_direction};
pub use shuffle::shuffle;
