//! Monotonic message id allocation.
//!
//! Ids are issued from a single in-process counter seeded at startup with
//! the highest id already in the store. Allocation and commit are not
//! atomic with each other: an id handed out for an append that later fails
//! is never reused, leaving a permanent gap in the sequence. Gaps are
//! accepted; ordering and uniqueness are what matter.

use std::sync::{Mutex, PoisonError};

/// Issues strictly increasing message ids.
///
/// The counter is owned by this struct and only ever touched through
/// [`allocate`](IdAllocator::allocate); handlers share it behind an `Arc`.
#[derive(Debug)]
pub struct IdAllocator {
    next: Mutex<i64>,
}

impl IdAllocator {
    /// Create an allocator whose first [`allocate`](IdAllocator::allocate)
    /// call returns `seed + 1`.
    ///
    /// The seed comes from the store's maximum existing id, so restarts
    /// continue the sequence instead of reusing ids.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            next: Mutex::new(seed),
        }
    }

    /// Atomically increment the counter and return the new value.
    ///
    /// Safe to call from any number of threads; no two callers observe the
    /// same value. The critical section is just the increment, so the lock
    /// cannot be poisoned by a panic inside it; a poisoned lock is
    /// recovered rather than propagated.
    pub fn allocate(&self) -> i64 {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        *next += 1;
        *next
    }
}
