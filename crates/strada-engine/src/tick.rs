//! Network driver: the single-threaded build loop.
//!
//! [`NetworkDriver`] wires together the arena, the spawn queue and the
//! builders into a tick loop that turns at most one spawn request per
//! tick into one atomically committed network build.
//!
//! # Tick lifecycle
//!
//! ```text
//! Idle ──request pending──▶ Building ──staged ok──▶ Committed ──▶ Idle
//!   ▲                          │
//!   └────────build error───────┘   (batch dropped, nothing visible)
//! ```
//!
//! The request is taken off the queue before building starts, so it is
//! consumed whether or not the build succeeds.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strada_arena::{ArenaError, NetworkArena, NetworkSnapshot, OwnedSnapshot};
use strada_build::{
    build_demo_network, build_generator_network, ArityTally, DemoNetwork, GeneratedNetwork,
};
use strada_core::{
    BuildError, Junction, NetworkGenerationId, SpawnReceipt, SpawnRequest, SpawnRequestId, TickId,
};
use thiserror::Error;

use crate::config::{BuildMode, ConfigError, DriverConfig};
use crate::ingress::SpawnQueue;
use crate::metrics::BuildMetrics;

// ── DriverState ──────────────────────────────────────────────────

/// Where the driver is in the build lifecycle.
///
/// Between ticks the driver is always [`Idle`](DriverState::Idle); the
/// other states are held only while [`NetworkDriver::execute_tick()`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DriverState {
    /// No build in progress.
    #[default]
    Idle,
    /// Staging a batch for a consumed request.
    Building,
    /// The batch has been committed; junction bookkeeping is being updated.
    Committed,
}

// ── TickOutcome ──────────────────────────────────────────────────

/// Summary of a committed build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitReport {
    /// The request that was built.
    pub request: SpawnRequestId,
    /// Network generation published by the commit.
    pub generation: NetworkGenerationId,
    /// Counts and timing for the build.
    pub metrics: BuildMetrics,
}

/// Result of a successful tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No request was pending; nothing happened.
    Idle,
    /// One request was consumed and its network committed.
    Committed(CommitReport),
}

// ── Errors ───────────────────────────────────────────────────────

/// Why a build was aborted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StepError {
    /// The builder rejected the input.
    #[error("build failed: {0}")]
    Build(#[from] BuildError),
    /// The arena rejected the staged batch.
    #[error("commit failed: {0}")]
    Commit(#[from] ArenaError),
}

/// Error returned from [`NetworkDriver::execute_tick()`].
///
/// Carries the ID of the consumed request so the operator can tell which
/// build failed. The request is not re-queued.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("spawn request {request}: {kind}")]
pub struct TickError {
    /// The underlying error.
    #[source]
    pub kind: StepError,
    /// The consumed request.
    pub request: SpawnRequestId,
}

// ── NetworkDriver ────────────────────────────────────────────────

enum Staged {
    Generator(GeneratedNetwork),
    Demo(DemoNetwork),
}

impl Staged {
    fn tally(&self) -> ArityTally {
        match self {
            Self::Generator(net) => net.tally,
            Self::Demo(net) => net.tally,
        }
    }
}

/// Single-threaded network driver.
///
/// Owns the committed network, the pending spawn requests and the
/// junctions produced by the upstream road generator.
pub struct NetworkDriver {
    arena: NetworkArena,
    ingress: SpawnQueue,
    junctions: Vec<Junction>,
    mode: BuildMode,
    seed: u64,
    state: DriverState,
    current_tick: TickId,
    queue_full_rejections: u64,
    aborted_builds: u64,
    last_metrics: BuildMetrics,
}

impl NetworkDriver {
    /// Construct a driver from a [`DriverConfig`] and the junctions to
    /// build in [`BuildMode::Generator`].
    ///
    /// Junction `i` is reported as `JunctionId(i)` in build errors.
    pub fn new(config: DriverConfig, junctions: Vec<Junction>) -> Result<Self, ConfigError> {
        config.validate()?;
        if u32::try_from(junctions.len()).is_err() {
            return Err(ConfigError::JunctionCountOverflow {
                value: junctions.len(),
            });
        }
        Ok(Self {
            arena: NetworkArena::new(config.arena)?,
            ingress: SpawnQueue::new(config.max_pending_requests, config.duplicate_policy),
            junctions,
            mode: config.mode,
            seed: config.seed,
            state: DriverState::Idle,
            current_tick: TickId(0),
            queue_full_rejections: 0,
            aborted_builds: 0,
            last_metrics: BuildMetrics::default(),
        })
    }

    /// Queue a spawn request for a later tick.
    pub fn submit(&mut self, request: SpawnRequest) -> SpawnReceipt {
        let receipt = self.ingress.submit(request);
        match (receipt.request_id, receipt.reason_code) {
            (Some(id), _) => tracing::debug!(request = %id, "spawn request queued"),
            (None, Some(reason)) => {
                if reason == strada_core::IngressError::QueueFull {
                    self.queue_full_rejections += 1;
                }
                tracing::warn!(%reason, "spawn request rejected");
            }
            (None, None) => {}
        }
        receipt
    }

    /// Withdraw a request that has not been built yet.
    pub fn cancel(&mut self, id: SpawnRequestId) -> Option<SpawnRequest> {
        self.ingress.cancel(id)
    }

    /// Execute one tick.
    ///
    /// Takes the oldest pending request, stages the network selected by
    /// the configured [`BuildMode`], and commits it. With no request
    /// pending this is a no-op returning [`TickOutcome::Idle`].
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if building or committing fails. Nothing from
    /// the aborted batch is visible and no junction is modified.
    pub fn execute_tick(&mut self) -> Result<TickOutcome, TickError> {
        self.current_tick = TickId(self.current_tick.0 + 1);
        let Some((request_id, request)) = self.ingress.take_next() else {
            return Ok(TickOutcome::Idle);
        };

        self.transition(DriverState::Building);
        let build_start = Instant::now();
        let mut batch = self.arena.begin_batch();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let staged = match self.mode {
            BuildMode::Generator => {
                build_generator_network(&self.junctions, &request, &mut batch, &mut rng)
                    .map(Staged::Generator)
            }
            BuildMode::FixedDemo => {
                build_demo_network(&request, &mut batch, &mut rng).map(Staged::Demo)
            }
        };
        let staged = match staged {
            Ok(staged) => staged,
            // `batch` drops here: nothing staged becomes visible.
            Err(e) => return Err(self.abort(request_id, StepError::Build(e))),
        };
        let (lanes, connectors, agents) = (
            batch.lane_count(),
            batch.connector_count(),
            batch.agent_count(),
        );
        let build_us = build_start.elapsed().as_micros() as u64;

        let commit_start = Instant::now();
        let generation = match self.arena.commit(batch) {
            Ok(generation) => generation,
            Err(e) => return Err(self.abort(request_id, StepError::Commit(e))),
        };
        let commit_us = commit_start.elapsed().as_micros() as u64;
        self.transition(DriverState::Committed);

        if let Staged::Generator(net) = &staged {
            for (junction, lanes) in self.junctions.iter_mut().zip(&net.junction_lanes) {
                junction.lane_entities.extend_from_slice(lanes);
            }
        }

        let tally = staged.tally();
        tracing::info!(
            request = %request_id,
            generation = %generation,
            mode = ?self.mode,
            dead_ends = tally.dead_ends,
            merges = tally.merges,
            triples = tally.triples,
            "Single {} Double {} Triple {}",
            tally.dead_ends,
            tally.merges,
            tally.triples,
        );

        let metrics = BuildMetrics {
            dead_ends: tally.dead_ends,
            merges: tally.merges,
            triples: tally.triples,
            lanes_created: lanes as u32,
            connectors_created: connectors as u32,
            agents_created: agents as u32,
            build_us,
            commit_us,
            memory_bytes: self.arena.memory_bytes(),
            queue_full_rejections: self.queue_full_rejections,
            aborted_builds: self.aborted_builds,
        };
        self.last_metrics = metrics.clone();
        self.transition(DriverState::Idle);

        Ok(TickOutcome::Committed(CommitReport {
            request: request_id,
            generation,
            metrics,
        }))
    }

    fn abort(&mut self, request: SpawnRequestId, kind: StepError) -> TickError {
        self.aborted_builds += 1;
        tracing::warn!(request = %request, error = %kind, "network build aborted");
        self.transition(DriverState::Idle);
        TickError { kind, request }
    }

    fn transition(&mut self, next: DriverState) {
        tracing::debug!(from = ?self.state, to = ?next, tick = %self.current_tick, "driver state");
        self.state = next;
    }

    /// Reset the driver to its initial state.
    ///
    /// Drops the committed network and every pending request, and clears
    /// each junction's lane list. Request IDs keep counting up.
    pub fn reset(&mut self) {
        self.arena.reset();
        self.ingress.clear();
        for junction in &mut self.junctions {
            junction.lane_entities.clear();
        }
        self.state = DriverState::Idle;
        self.current_tick = TickId(0);
        self.queue_full_rejections = 0;
        self.aborted_builds = 0;
        self.last_metrics = BuildMetrics::default();
    }

    /// Get a read-only snapshot of the committed network.
    pub fn snapshot(&self) -> NetworkSnapshot<'_> {
        self.arena.snapshot()
    }

    /// Get an owned, thread-safe snapshot of the committed network.
    pub fn owned_snapshot(&self) -> OwnedSnapshot {
        self.arena.owned_snapshot()
    }

    /// The junctions this driver builds in generator mode.
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Current tick ID.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Configured build mode.
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Number of requests waiting to be built.
    pub fn pending_requests(&self) -> usize {
        self.ingress.len()
    }

    /// Whether `id` is still waiting to be built.
    pub fn is_pending(&self, id: SpawnRequestId) -> bool {
        self.ingress.contains(id)
    }

    /// Metrics from the most recent committed build.
    pub fn last_metrics(&self) -> &BuildMetrics {
        &self.last_metrics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use strada_arena::{ArenaConfig, EntityKind};
    use strada_core::{IngressError, JunctionId, NetworkReader, SplineSegment};
    use strada_test_utils::{chain_network, junction_of_arity, spawn_request};

    fn demo_driver() -> NetworkDriver {
        NetworkDriver::new(DriverConfig::default(), Vec::new()).unwrap()
    }

    fn generator_driver(junctions: Vec<Junction>) -> NetworkDriver {
        NetworkDriver::new(DriverConfig::generator(0), junctions).unwrap()
    }

    #[test]
    fn idle_tick_does_nothing() {
        let mut driver = demo_driver();
        assert_eq!(driver.execute_tick(), Ok(TickOutcome::Idle));
        assert_eq!(driver.snapshot().lane_count(), 0);
        assert_eq!(driver.current_tick(), TickId(1));
        assert_eq!(driver.state(), DriverState::Idle);
    }

    #[test]
    fn request_is_consumed_by_one_tick() {
        let mut driver = demo_driver();
        let id = driver.submit(spawn_request()).request_id.unwrap();
        assert!(driver.is_pending(id));

        let outcome = driver.execute_tick().unwrap();
        let TickOutcome::Committed(report) = outcome else {
            panic!("expected a committed build");
        };
        assert_eq!(report.request, id);
        assert_eq!(report.generation, NetworkGenerationId(1));
        assert!(!driver.is_pending(id));
        assert_eq!(driver.pending_requests(), 0);

        assert_eq!(driver.execute_tick(), Ok(TickOutcome::Idle));
        assert_eq!(driver.snapshot().generation(), NetworkGenerationId(1));
    }

    #[test]
    fn demo_metrics() {
        let mut driver = demo_driver();
        driver.submit(spawn_request());
        driver.execute_tick().unwrap();
        let m = driver.last_metrics();
        assert_eq!((m.dead_ends, m.merges, m.triples), (3, 1, 1));
        assert_eq!(m.lanes_created, 8);
        assert_eq!(m.connectors_created, 5);
        assert_eq!(m.agents_created, 4);
        assert!(m.memory_bytes > 0);
    }

    #[test]
    fn generator_extends_lane_entities_after_commit() {
        let mut driver = generator_driver(chain_network(3, 10.0));
        driver.submit(spawn_request());
        driver.execute_tick().unwrap();
        let lanes: Vec<usize> = driver
            .junctions()
            .iter()
            .map(|j| j.lane_entities.len())
            .collect();
        assert_eq!(lanes, vec![2, 4, 2]);
        assert_eq!(driver.snapshot().agent_count(), 2);
    }

    #[test]
    fn failed_build_consumes_request_and_leaves_no_trace() {
        let mut junctions = chain_network(3, 10.0);
        junctions.push(junction_of_arity(Vec3::ZERO, 5, 1.0));
        let mut driver = generator_driver(junctions);
        let id = driver.submit(spawn_request()).request_id.unwrap();

        let err = driver.execute_tick().unwrap_err();
        assert_eq!(err.request, id);
        assert_eq!(
            err.kind,
            StepError::Build(BuildError::UnsupportedArity {
                junction: JunctionId(3),
                count: 5,
            })
        );
        let snap = driver.snapshot();
        assert_eq!(snap.lane_count(), 0);
        assert_eq!(snap.connector_count(), 0);
        assert_eq!(snap.agent_count(), 0);
        assert_eq!(snap.generation(), NetworkGenerationId(0));
        assert!(driver.junctions().iter().all(|j| j.lane_entities.is_empty()));
        assert_eq!(driver.state(), DriverState::Idle);

        // Not retried.
        assert_eq!(driver.execute_tick(), Ok(TickOutcome::Idle));
    }

    #[test]
    fn commit_failure_is_reported_with_request() {
        let config = DriverConfig {
            arena: ArenaConfig {
                max_agents: 3,
                ..ArenaConfig::default()
            },
            ..DriverConfig::default()
        };
        let mut driver = NetworkDriver::new(config, Vec::new()).unwrap();
        let id = driver.submit(spawn_request()).request_id.unwrap();
        let err = driver.execute_tick().unwrap_err();
        assert_eq!(
            err,
            TickError {
                kind: StepError::Commit(ArenaError::CapacityExceeded {
                    kind: EntityKind::Agent,
                    requested: 4,
                    capacity: 3,
                }),
                request: id,
            }
        );
        assert_eq!(driver.snapshot().lane_count(), 0);
    }

    #[test]
    fn extra_requests_build_on_later_ticks() {
        let mut driver = demo_driver();
        driver.submit(spawn_request());
        driver.submit(spawn_request());
        driver.execute_tick().unwrap();
        assert_eq!(driver.pending_requests(), 1);
        driver.execute_tick().unwrap();
        assert_eq!(driver.snapshot().lane_count(), 16);
        assert_eq!(driver.snapshot().generation(), NetworkGenerationId(2));
    }

    #[test]
    fn queue_full_is_counted() {
        let config = DriverConfig {
            max_pending_requests: 1,
            ..DriverConfig::default()
        };
        let mut driver = NetworkDriver::new(config, Vec::new()).unwrap();
        driver.submit(spawn_request());
        let r = driver.submit(spawn_request());
        assert_eq!(r.reason_code, Some(IngressError::QueueFull));
        driver.execute_tick().unwrap();
        assert_eq!(driver.last_metrics().queue_full_rejections, 1);
    }

    #[test]
    fn cancelled_request_never_builds() {
        let mut driver = demo_driver();
        let id = driver.submit(spawn_request()).request_id.unwrap();
        assert!(driver.cancel(id).is_some());
        assert_eq!(driver.execute_tick(), Ok(TickOutcome::Idle));
    }

    #[test]
    fn reset_clears_network_and_junction_lanes() {
        let mut driver = generator_driver(vec![Junction::new(
            Vec3::ZERO,
            [SplineSegment::straight(Vec3::ZERO, Vec3::X)],
        )]);
        driver.submit(spawn_request());
        driver.execute_tick().unwrap();
        driver.reset();
        assert_eq!(driver.snapshot().lane_count(), 0);
        assert_eq!(driver.current_tick(), TickId(0));
        assert!(driver.junctions()[0].lane_entities.is_empty());
        assert_eq!(driver.last_metrics(), &BuildMetrics::default());
    }

    #[test]
    fn tick_error_message_names_request() {
        let e = TickError {
            kind: StepError::Build(BuildError::UnsupportedArity {
                junction: JunctionId(2),
                count: 0,
            }),
            request: SpawnRequestId(9),
        };
        assert_eq!(
            e.to_string(),
            "spawn request 9: build failed: junction 2: unsupported junction arity 0"
        );
    }
}
