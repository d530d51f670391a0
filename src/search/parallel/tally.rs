//! Per-worker iteration counts collected at the end of a race.

use std::sync::{Mutex, PoisonError};

/// One slot per worker, each written exactly once by its owner.
///
/// The slots are sized before any worker starts. The mutex is only held for
/// the write-back when a worker exits.
#[derive(Debug)]
pub struct IterationTally {
    slots: Mutex<Vec<Option<u64>>>,
}

impl IterationTally {
    pub fn new(num_workers: usize) -> Self {
        Self {
            slots: Mutex::new(vec![None; num_workers]),
        }
    }

    /// Store the iteration count of `worker_id`.
    ///
    /// Returns false, leaving the tally untouched, if the slot does not exist
    /// or was already written.
    pub fn record(&self, worker_id: usize, iterations: u64) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        match slots.get_mut(worker_id) {
            Some(slot) if slot.is_none() => {
                *slot = Some(iterations);
                true
            }
            _ => false,
        }
    }

    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of slots that have been written.
    pub fn recorded(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }

    /// Counts in worker order. Unwritten slots read as zero.
    pub fn counts(&self) -> Vec<u64> {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|slot| slot.unwrap_or(0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_record_once() {
        let tally = IterationTally::new(2);

        assert!(tally.record(0, 10));
        assert!(!tally.record(0, 99));
        assert_eq!(tally.counts(), vec![10, 0]);
        assert_eq!(tally.recorded(), 1);
    }

    #[test]
    fn test_record_out_of_range() {
        let tally = IterationTally::new(1);
        assert!(!tally.record(1, 5));
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.counts(), vec![0]);
    }

    #[test]
    fn test_concurrent_records_land_in_own_slots() {
        let num_workers = 16;
        let tally = Arc::new(IterationTally::new(num_workers));

        let handles: Vec<_> = (0..num_workers)
            .map(|worker_id| {
                let tally = Arc::clone(&tally);
                thread::spawn(move || tally.record(worker_id, worker_id as u64 * 1000))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }

        let counts = tally.counts();
        assert_eq!(counts.len(), num_workers);
        for (worker_id, count) in counts.iter().enumerate() {
            assert_eq!(*count, worker_id as u64 * 1000);
        }
    }
}
