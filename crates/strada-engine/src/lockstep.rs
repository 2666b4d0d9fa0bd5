//! Lockstep (synchronous) network facade.
//!
//! [`LockstepNetwork`] is the primary user-facing API. Each call to
//! [`step_sync()`](LockstepNetwork::step_sync) submits spawn requests,
//! executes one driver tick, and returns a snapshot of the resulting
//! network.
//!
//! # Ownership model
//!
//! `LockstepNetwork` is [`Send`] but all mutating methods take
//! `&mut self`, and [`step_sync()`](LockstepNetwork::step_sync) returns a
//! [`NetworkSnapshot`] that borrows from `self`. The caller cannot step
//! again while holding a snapshot.

use strada_arena::{NetworkSnapshot, OwnedSnapshot};
use strada_core::{Junction, SpawnReceipt, SpawnRequest, SpawnRequestId};

use crate::config::{ConfigError, DriverConfig};
use crate::metrics::BuildMetrics;
use crate::tick::{NetworkDriver, TickError, TickOutcome};

// Compile-time assertion: LockstepNetwork is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<LockstepNetwork>();
    }
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of a successful [`LockstepNetwork::step_sync()`] call.
#[derive(Debug)]
pub struct StepResult<'n> {
    /// Read-only view of the network after this tick.
    pub snapshot: NetworkSnapshot<'n>,
    /// One receipt per submitted request, in submission order.
    pub receipts: Vec<SpawnReceipt>,
    /// What the tick did.
    pub outcome: TickOutcome,
}

// ── LockstepNetwork ─────────────────────────────────────────────

/// Single-threaded network for lockstep execution.
///
/// # Example
///
/// ```
/// use strada_core::{ConnectorTemplates, NetworkReader, SpawnRequest, TemplateId};
/// use strada_engine::{DriverConfig, LockstepNetwork};
///
/// let mut network = LockstepNetwork::new(DriverConfig::default(), Vec::new()).unwrap();
/// let request = SpawnRequest {
///     connectors: ConnectorTemplates {
///         dead_end: TemplateId(0),
///         merge: TemplateId(1),
///         triple: TemplateId(2),
///     },
///     car: TemplateId(3),
/// };
/// let result = network.step_sync(vec![request]).unwrap();
/// assert_eq!(result.snapshot.lane_count(), 8);
/// ```
pub struct LockstepNetwork {
    driver: NetworkDriver,
}

impl LockstepNetwork {
    /// Create a new lockstep network.
    pub fn new(config: DriverConfig, junctions: Vec<Junction>) -> Result<Self, ConfigError> {
        Ok(Self {
            driver: NetworkDriver::new(config, junctions)?,
        })
    }

    /// Execute one tick synchronously.
    ///
    /// Submits `requests`, then runs one tick. At most one request is
    /// built per tick; the rest stay queued for later ticks (or are
    /// rejected, per the configured policy, as shown in `receipts`).
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if the build for the consumed request fails.
    /// Receipts for this call's submissions are discarded in that case;
    /// use [`NetworkDriver`] directly if you need them.
    pub fn step_sync(&mut self, requests: Vec<SpawnRequest>) -> Result<StepResult<'_>, TickError> {
        let receipts: Vec<SpawnReceipt> = requests
            .into_iter()
            .map(|r| self.driver.submit(r))
            .collect();
        let outcome = self.driver.execute_tick()?;
        Ok(StepResult {
            snapshot: self.driver.snapshot(),
            receipts,
            outcome,
        })
    }

    /// Withdraw a request that has not been built yet.
    pub fn cancel(&mut self, id: SpawnRequestId) -> Option<SpawnRequest> {
        self.driver.cancel(id)
    }

    /// Reset to an empty network.
    pub fn reset(&mut self) {
        self.driver.reset();
    }

    /// Get a read-only snapshot of the committed network.
    pub fn snapshot(&self) -> NetworkSnapshot<'_> {
        self.driver.snapshot()
    }

    /// Get an owned, thread-safe snapshot of the committed network.
    pub fn owned_snapshot(&self) -> OwnedSnapshot {
        self.driver.owned_snapshot()
    }

    /// Metrics from the most recent committed build.
    pub fn last_metrics(&self) -> &BuildMetrics {
        self.driver.last_metrics()
    }

    /// Borrow the underlying driver.
    pub fn driver(&self) -> &NetworkDriver {
        &self.driver
    }
}

impl std::fmt::Debug for LockstepNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockstepNetwork")
            .field("current_tick", &self.driver.current_tick())
            .field("mode", &self.driver.mode())
            .field("pending_requests", &self.driver.pending_requests())
            .finish_non_exhaustive()
    }
}
