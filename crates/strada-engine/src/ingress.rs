//! Bounded spawn-request queue.
//!
//! [`SpawnQueue`] buffers spawn requests between submission and the tick
//! that consumes them. It enforces a capacity limit, assigns monotonic
//! request IDs, and hands requests out in submission order.
//!
//! Pending requests are indexed by ID so a caller can withdraw one with
//! [`cancel()`](SpawnQueue::cancel) before it is built.

use indexmap::IndexMap;
use strada_core::{IngressError, SpawnReceipt, SpawnRequest, SpawnRequestId};

use crate::config::DuplicatePolicy;

/// Bounded queue of spawn requests awaiting a tick.
#[derive(Debug)]
pub struct SpawnQueue {
    pending: IndexMap<SpawnRequestId, SpawnRequest>,
    capacity: usize,
    policy: DuplicatePolicy,
    next_id: u64,
}

impl SpawnQueue {
    /// Create a new queue with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, policy: DuplicatePolicy) -> Self {
        assert!(capacity > 0, "SpawnQueue capacity must be at least 1");
        Self {
            pending: IndexMap::with_capacity(capacity),
            capacity,
            policy,
            next_id: 0,
        }
    }

    /// Submit a request.
    ///
    /// Accepted requests get the next ID from a counter that persists
    /// across submissions and [`clear()`](Self::clear), so an ID is never
    /// reused. Rejected requests do not consume an ID.
    pub fn submit(&mut self, request: SpawnRequest) -> SpawnReceipt {
        if self.policy == DuplicatePolicy::Reject && !self.pending.is_empty() {
            return rejected(IngressError::RequestPending);
        }
        if self.pending.len() >= self.capacity {
            return rejected(IngressError::QueueFull);
        }

        let id = SpawnRequestId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id, request);
        SpawnReceipt {
            accepted: true,
            request_id: Some(id),
            reason_code: None,
        }
    }

    /// Remove and return the oldest pending request.
    pub fn take_next(&mut self) -> Option<(SpawnRequestId, SpawnRequest)> {
        self.pending.shift_remove_index(0)
    }

    /// Withdraw a pending request. Returns it if it was still pending.
    pub fn cancel(&mut self, id: SpawnRequestId) -> Option<SpawnRequest> {
        self.pending.shift_remove(&id)
    }

    /// Whether `id` is still waiting to be built.
    pub fn contains(&self, id: SpawnRequestId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether no request is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Maximum number of pending requests.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all pending requests.
    ///
    /// Called during [`NetworkDriver::reset()`](crate::NetworkDriver::reset).
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

fn rejected(reason: IngressError) -> SpawnReceipt {
    SpawnReceipt {
        accepted: false,
        request_id: None,
        reason_code: Some(reason),
    }
}
