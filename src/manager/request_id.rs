use std::sync::atomic::{AtomicI64, Ordering};

use crate::protocol::RequestId;

/// Allocates request ids 1, 2, 3, ... for one manager.
#[derive(Debug)]
pub struct RequestIdCounter {
    next: AtomicI64,
}

impl RequestIdCounter {
    /// Counter whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Allocate the next id.
    pub fn next(&self) -> RequestId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for RequestIdCounter {
    fn default() -> Self {
        Self::new()
    }
}
