//! Notification interface between the worker loop and whatever displays it
//!
//! Workers never talk to a renderer directly. They call a `SearchObserver`,
//! which is free to drop or coalesce candidate updates. Success is reported
//! exactly once per run.

use crossbeam_channel::{Receiver, Sender, bounded};

/// Receives progress from the worker loop.
///
/// Called from the workers' hot loop, so implementations must be cheap and
/// must never block on candidate updates.
pub trait SearchObserver: Send + Sync {
    /// A worker produced a new candidate. May be dropped.
    fn on_candidate_update(&self, worker_id: usize, candidate: &str);

    /// A worker found a sorted candidate. Called once, by the winner.
    fn on_success(&self, worker_id: usize, candidate: &str);
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn on_candidate_update(&self, _worker_id: usize, _candidate: &str) {}

    fn on_success(&self, _worker_id: usize, _candidate: &str) {}
}

/// Message sent from workers to a display thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverEvent {
    /// Latest candidate of a worker.
    Candidate { worker_id: usize, candidate: String },
    /// A worker won the race.
    Success { worker_id: usize, candidate: String },
}

/// Observer that forwards events over a bounded channel.
///
/// Candidate updates are dropped once the channel is nearly full, so a slow
/// consumer only sees a sample of them. The last slot is left for the success
/// event, which is sent blocking.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: Sender<ObserverEvent>,
    candidate_limit: usize,
}

impl ChannelObserver {
    /// Create an observer and the receiving end for the consumer.
    pub fn new(capacity: usize) -> (Self, Receiver<ObserverEvent>) {
        let capacity = capacity.max(2);
        let (tx, rx) = bounded(capacity);
        let observer = Self {
            tx,
            candidate_limit: capacity - 1,
        };
        (observer, rx)
    }
}

impl SearchObserver for ChannelObserver {
    fn on_candidate_update(&self, worker_id: usize, candidate: &str) {
        // Skip the allocation entirely when the update would be dropped anyway
        if self.tx.len() >= self.candidate_limit {
            return;
        }
        let _ = self.tx.try_send(ObserverEvent::Candidate {
            worker_id,
            candidate: candidate.to_owned(),
        });
    }

    fn on_success(&self, worker_id: usize, candidate: &str) {
        // A disconnected consumer just means nobody is watching
        let _ = self.tx.send(ObserverEvent::Success {
            worker_id,
            candidate: candidate.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_observer_forwards_events() {
        let (observer, rx) = ChannelObserver::new(8);

        observer.on_candidate_update(1, "312");
        observer.on_success(1, "123");

        assert_eq!(
            rx.recv().unwrap(),
            ObserverEvent::Candidate {
                worker_id: 1,
                candidate: "312".to_string()
            }
        );
        assert_eq!(
            rx.recv().unwrap(),
            ObserverEvent::Success {
                worker_id: 1,
                candidate: "123".to_string()
            }
        );
    }

    #[test]
    fn test_channel_observer_drops_updates_when_full() {
        let (observer, rx) = ChannelObserver::new(3);

        for i in 0..10 {
            observer.on_candidate_update(0, &i.to_string());
        }

        // Two updates fit, the rest were dropped without blocking
        assert_eq!(rx.len(), 2);

        // The reserved slot still takes the success event without blocking
        observer.on_success(0, "0123");
        drop(observer);
        let received: Vec<_> = rx.iter().collect();
        assert_eq!(received.len(), 3);
        assert!(matches!(
            received.last(),
            Some(ObserverEvent::Success { .. })
        ));
    }

    #[test]
    fn test_channel_observer_survives_disconnected_consumer() {
        let (observer, rx) = ChannelObserver::new(1);
        drop(rx);

        observer.on_candidate_update(0, "21");
        observer.on_success(0, "12");
    }

    #[test]
    fn test_null_observer() {
        let observer = NullObserver;
        observer.on_candidate_update(0, "21");
        observer.on_success(0, "12");
    }
}
