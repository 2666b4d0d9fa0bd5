//! Private accumulation buffer for one build.
//!
//! [`StagedBatch`] records creation commands without touching the arenas.
//! It is created by [`NetworkArena::begin_batch()`](crate::NetworkArena::begin_batch)
//! and either handed to [`NetworkArena::commit()`](crate::NetworkArena::commit)
//! or dropped. Dropping a batch is the rollback: nothing it staged was
//! ever visible.

use strada_core::{
    Agent, AgentId, BuildCommand, Connector, ConnectorId, Lane, LaneId, NetworkGenerationId,
};

/// Command list for a single atomic build.
///
/// IDs handed out here are the IDs the entities will have after commit:
/// the n-th staged lane gets `LaneId(committed_lanes + n)`, and likewise
/// for connectors and agents. IDs that would land past an arena's
/// capacity are handed out anyway; commit rejects the batch.
#[derive(Debug)]
#[must_use]
pub struct StagedBatch {
    /// Generation the batch was opened against.
    basis: NetworkGenerationId,
    /// Committed lane count at open time.
    lane_base: usize,
    /// Committed connector count at open time.
    connector_base: usize,
    /// Committed agent count at open time.
    agent_base: usize,
    /// Commands in staging order.
    commands: Vec<BuildCommand>,
    /// Command index of each staged lane, by staged ordinal.
    lane_slots: Vec<usize>,
    /// Number of staged connectors.
    connector_count: usize,
    /// Number of staged agents.
    agent_count: usize,
}

impl StagedBatch {
    pub(crate) fn new(
        basis: NetworkGenerationId,
        lane_base: usize,
        connector_base: usize,
        agent_base: usize,
    ) -> Self {
        Self {
            basis,
            lane_base,
            connector_base,
            agent_base,
            commands: Vec::new(),
            lane_slots: Vec::new(),
            connector_count: 0,
            agent_count: 0,
        }
    }

    /// Stage a lane and return the ID it will be committed under.
    pub fn stage_lane(&mut self, lane: Lane) -> LaneId {
        let id = LaneId((self.lane_base + self.lane_slots.len()) as u32);
        self.lane_slots.push(self.commands.len());
        self.commands.push(BuildCommand::CreateLane { id, lane });
        id
    }

    /// Stage a connector and return the ID it will be committed under.
    pub fn stage_connector(&mut self, connector: Connector) -> ConnectorId {
        let id = ConnectorId((self.connector_base + self.connector_count) as u32);
        self.connector_count += 1;
        self.commands.push(BuildCommand::CreateConnector { id, connector });
        id
    }

    /// Stage an agent and return the ID it will be committed under.
    ///
    /// On commit the agent is appended to `agent.lane`'s agent list, in
    /// staging order.
    pub fn stage_agent(&mut self, agent: Agent) -> AgentId {
        let id = AgentId((self.agent_base + self.agent_count) as u32);
        self.agent_count += 1;
        self.commands.push(BuildCommand::CreateAgent { id, agent });
        id
    }

    /// Look up a lane staged in this batch.
    ///
    /// Returns `None` for committed lanes and unknown IDs.
    pub fn staged_lane(&self, id: LaneId) -> Option<&Lane> {
        let ordinal = id.index().checked_sub(self.lane_base)?;
        let slot = *self.lane_slots.get(ordinal)?;
        match self.commands.get(slot)? {
            BuildCommand::CreateLane { lane, .. } => Some(lane),
            _ => None,
        }
    }

    /// All staged commands, in staging order.
    pub fn commands(&self) -> &[BuildCommand] {
        &self.commands
    }

    /// Generation this batch was opened against.
    pub fn basis(&self) -> NetworkGenerationId {
        self.basis
    }

    /// Number of staged lanes.
    pub fn lane_count(&self) -> usize {
        self.lane_slots.len()
    }

    /// Number of staged connectors.
    pub fn connector_count(&self) -> usize {
        self.connector_count
    }

    /// Number of staged agents.
    pub fn agent_count(&self) -> usize {
        self.agent_count
    }

    /// Whether nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn bases(&self) -> (usize, usize, usize) {
        (self.lane_base, self.connector_base, self.agent_base)
    }

    pub(crate) fn into_commands(self) -> Vec<BuildCommand> {
        self.commands
    }
}
