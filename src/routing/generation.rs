//! Generation counter used to drop results that arrive too late.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter; every [`Generation::next`] invalidates older tickets.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    counter: Arc<AtomicU64>,
}

/// Proof of which generation started a piece of work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start new work, making all previously issued tickets stale.
    pub fn next(&self) -> Ticket {
        Ticket(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Invalidate outstanding tickets without starting new work.
    pub fn invalidate(&self) {
        self.counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket.0
    }
}
