//! Stale-response protection for collaborator queries
//!
//! Each query takes a ticket. Starting a newer query invalidates every
//! older ticket, so a response that arrives after the reference point
//! moved can be dropped instead of overwriting fresher results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Hands out query tickets; clones share the same sequence
#[derive(Debug, Clone, Default)]
pub struct QueryTracker {
    latest: Arc<AtomicU64>,
}

/// Proof that a query was started; current until a newer one begins
#[derive(Debug, Clone)]
pub struct QueryTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl QueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, invalidating all earlier tickets
    pub fn begin(&self) -> QueryTicket {
        let generation = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        QueryTicket {
            generation,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Invalidate every outstanding ticket without starting a query
    pub fn cancel_all(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    /// Keep `value` only if `ticket` is still the latest query
    pub fn resolve<T>(&self, ticket: &QueryTicket, value: T) -> Option<T> {
        if ticket.is_current() {
            Some(value)
        } else {
            debug!(generation = ticket.generation, "discarding stale query result");
            None
        }
    }
}

impl QueryTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// False once a newer query began or the tracker was cancelled
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::Acquire) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let tracker = QueryTracker::new();
        let first = tracker.begin();
        assert!(first.is_current());

        let second = tracker.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
        assert!(second.generation() > first.generation());
    }

    #[test]
    fn test_resolve_drops_stale() {
        let tracker = QueryTracker::new();
        let old = tracker.begin();
        let new = tracker.begin();

        assert_eq!(tracker.resolve(&old, "old"), None);
        assert_eq!(tracker.resolve(&new, "new"), Some("new"));
    }

    #[test]
    fn test_cancel_all() {
        let tracker = QueryTracker::new();
        let ticket = tracker.begin();
        tracker.cancel_all();
        assert!(!ticket.is_current());
        assert!(tracker.begin().is_current());
    }

    #[test]
    fn test_clones_share_sequence() {
        let tracker = QueryTracker::new();
        let other = tracker.clone();

        let ticket = tracker.begin();
        let _newer = other.begin();
        assert!(!ticket.is_current());
    }

    #[tokio::test]
    async fn test_out_of_order_completion() {
        let tracker = QueryTracker::new();

        let slow_ticket = tracker.begin();
        let slow = tokio::spawn(async move {
            tokio::time::sleep(std::time::Duration::from_millis(30)).await;
            slow_ticket
        });

        let fast_ticket = tracker.begin();
        let fast = tokio::spawn(async move { fast_ticket });

        let fast_ticket = fast.await.unwrap();
        let slow_ticket = slow.await.unwrap();

        assert_eq!(tracker.resolve(&fast_ticket, 2), Some(2));
        assert_eq!(tracker.resolve(&slow_ticket, 1), None);
    }
}
