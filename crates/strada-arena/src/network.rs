//! Network arena orchestrator.
//!
//! [`NetworkArena`] owns the committed lane, connector and agent arenas.
//! The lifecycle per build is:
//! 1. `begin_batch()`: open a [`StagedBatch`] against the current generation
//! 2. The builder stages commands into the batch
//! 3. `commit()`: validate the whole batch, then append it and bump the generation
//! 4. `snapshot()`: borrow the committed state as a [`NetworkSnapshot`]
//!
//! Dropping the batch instead of committing it abandons the build.

use strada_core::{Agent, AgentId, BuildCommand, Connector, Lane, LaneId, NetworkGenerationId};

use crate::config::ArenaConfig;
use crate::error::{ArenaError, EntityKind};
use crate::read::{NetworkSnapshot, OwnedSnapshot};
use crate::staging::StagedBatch;

/// Committed network state.
///
/// All three arenas are append-only between resets. A committed entity is
/// never moved or removed, so its ID stays valid for the life of the
/// arena; the only post-commit mutation is appending agent IDs to a
/// lane's agent list when a later batch seeds agents onto it.
#[derive(Debug)]
pub struct NetworkArena {
    /// Capacity limits.
    config: ArenaConfig,
    /// Lane arena.
    lanes: Vec<Lane>,
    /// Connector arena.
    connectors: Vec<Connector>,
    /// Agent arena.
    agents: Vec<Agent>,
    /// Current generation (incremented on commit).
    generation: NetworkGenerationId,
}

impl NetworkArena {
    /// Create an empty arena at generation 0.
    pub fn new(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self {
            config,
            lanes: Vec::new(),
            connectors: Vec::new(),
            agents: Vec::new(),
            generation: NetworkGenerationId(0),
        })
    }

    /// Open a batch against the current generation.
    pub fn begin_batch(&self) -> StagedBatch {
        StagedBatch::new(
            self.generation,
            self.lanes.len(),
            self.connectors.len(),
            self.agents.len(),
        )
    }

    /// Apply a batch atomically.
    ///
    /// The batch is validated in full before anything is written: basis
    /// generation, capacities, ID positions, and lane references. On any
    /// failure the arena is unchanged and the batch is consumed.
    /// On success returns the new generation.
    pub fn commit(&mut self, batch: StagedBatch) -> Result<NetworkGenerationId, ArenaError> {
        self.validate_batch(&batch)?;

        let lane_total = self.lanes.len() + batch.lane_count();
        self.lanes.reserve(batch.lane_count());
        self.connectors.reserve(batch.connector_count());
        self.agents.reserve(batch.agent_count());

        let mut attachments: Vec<(LaneId, AgentId)> = Vec::with_capacity(batch.agent_count());
        for command in batch.into_commands() {
            match command {
                BuildCommand::CreateLane { lane, .. } => self.lanes.push(lane),
                BuildCommand::CreateConnector { connector, .. } => {
                    self.connectors.push(connector)
                }
                BuildCommand::CreateAgent { id, agent } => {
                    attachments.push((agent.lane, id));
                    self.agents.push(agent);
                }
            }
        }
        debug_assert_eq!(self.lanes.len(), lane_total);

        // Lane references were validated above; every lookup succeeds.
        for (lane, agent) in attachments {
            if let Some(lane) = self.lanes.get_mut(lane.index()) {
                lane.agents.push(agent);
            }
        }

        self.generation = NetworkGenerationId(self.generation.0 + 1);
        Ok(self.generation)
    }

    fn validate_batch(&self, batch: &StagedBatch) -> Result<(), ArenaError> {
        if batch.basis() != self.generation {
            return Err(ArenaError::StaleBatch {
                batch_generation: batch.basis(),
                current: self.generation,
            });
        }
        let (lane_base, connector_base, agent_base) = batch.bases();
        if (lane_base, connector_base, agent_base)
            != (self.lanes.len(), self.connectors.len(), self.agents.len())
        {
            return Err(ArenaError::StaleBatch {
                batch_generation: batch.basis(),
                current: self.generation,
            });
        }

        let lane_total = lane_base + batch.lane_count();
        check_capacity(EntityKind::Lane, lane_total, self.config.max_lanes)?;
        check_capacity(
            EntityKind::Connector,
            connector_base + batch.connector_count(),
            self.config.max_connectors,
        )?;
        check_capacity(
            EntityKind::Agent,
            agent_base + batch.agent_count(),
            self.config.max_agents,
        )?;

        let (mut next_lane, mut next_connector, mut next_agent) =
            (lane_base, connector_base, agent_base);
        for command in batch.commands() {
            match command {
                BuildCommand::CreateLane { id, .. } => {
                    check_position(EntityKind::Lane, id.0, next_lane)?;
                    next_lane += 1;
                }
                BuildCommand::CreateConnector { id, connector } => {
                    check_position(EntityKind::Connector, id.0, next_connector)?;
                    next_connector += 1;
                    for lane in connector.lanes() {
                        if lane.index() >= lane_total {
                            return Err(ArenaError::DanglingLane {
                                lane,
                                referrer: EntityKind::Connector,
                            });
                        }
                    }
                }
                BuildCommand::CreateAgent { id, agent } => {
                    check_position(EntityKind::Agent, id.0, next_agent)?;
                    next_agent += 1;
                    if agent.lane.index() >= lane_total {
                        return Err(ArenaError::DanglingLane {
                            lane: agent.lane,
                            referrer: EntityKind::Agent,
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Borrow the committed state.
    pub fn snapshot(&self) -> NetworkSnapshot<'_> {
        NetworkSnapshot::new(&self.lanes, &self.connectors, &self.agents, self.generation)
    }

    /// Clone the committed state into an owned, thread-safe snapshot.
    pub fn owned_snapshot(&self) -> OwnedSnapshot {
        OwnedSnapshot::new(
            self.lanes.clone(),
            self.connectors.clone(),
            self.agents.clone(),
            self.generation,
        )
    }

    /// Drop every committed entity and return to generation 0.
    pub fn reset(&mut self) {
        self.lanes.clear();
        self.connectors.clear();
        self.agents.clear();
        self.generation = NetworkGenerationId(0);
    }

    /// Current generation.
    pub fn generation(&self) -> NetworkGenerationId {
        self.generation
    }

    /// Arena configuration.
    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Approximate heap usage of the committed arenas, in bytes.
    pub fn memory_bytes(&self) -> usize {
        let lane_agents: usize = self
            .lanes
            .iter()
            .map(|l| l.agents.capacity() * std::mem::size_of::<AgentId>())
            .sum();
        self.lanes.capacity() * std::mem::size_of::<Lane>()
            + self.connectors.capacity() * std::mem::size_of::<Connector>()
            + self.agents.capacity() * std::mem::size_of::<Agent>()
            + lane_agents
    }
}

fn check_capacity(kind: EntityKind, requested: usize, cap: u32) -> Result<(), ArenaError> {
    if requested > cap as usize {
        return Err(ArenaError::CapacityExceeded {
            kind,
            requested,
            capacity: cap as usize,
        });
    }
    Ok(())
}

fn check_position(kind: EntityKind, staged: u32, expected: usize) -> Result<(), ArenaError> {
    if staged as usize != expected {
        return Err(ArenaError::IdMismatch {
            kind,
            staged,
            expected: expected as u32,
        });
    }
    Ok(())
}
