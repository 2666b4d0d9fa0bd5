//! Test fixtures and mock types for Strada development.
//!
//! Provides a mock implementation of [`NetworkReader`] for consumers that
//! should be tested without an arena, plus input fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{chain_network, junction_of_arity, spawn_request, star_network};

use strada_core::{
    Agent, AgentId, Connector, ConnectorId, Lane, LaneId, NetworkGenerationId, NetworkReader,
};

/// Mock implementation of [`NetworkReader`].
///
/// Backed by plain vectors. Entities get IDs in push order, matching how
/// the arena numbers them.
pub struct MockNetworkReader {
    lanes: Vec<Lane>,
    connectors: Vec<Connector>,
    agents: Vec<Agent>,
    generation: NetworkGenerationId,
}

impl MockNetworkReader {
    pub fn new() -> Self {
        Self {
            lanes: Vec::new(),
            connectors: Vec::new(),
            agents: Vec::new(),
            generation: NetworkGenerationId(0),
        }
    }

    pub fn push_lane(&mut self, lane: Lane) -> LaneId {
        self.lanes.push(lane);
        LaneId((self.lanes.len() - 1) as u32)
    }

    pub fn push_connector(&mut self, connector: Connector) -> ConnectorId {
        self.connectors.push(connector);
        ConnectorId((self.connectors.len() - 1) as u32)
    }

    /// Push an agent and append it to its lane, if that lane exists.
    pub fn push_agent(&mut self, agent: Agent) -> AgentId {
        let id = AgentId(self.agents.len() as u32);
        if let Some(lane) = self.lanes.get_mut(agent.lane.index()) {
            lane.agents.push(id);
        }
        self.agents.push(agent);
        id
    }

    pub fn set_generation(&mut self, generation: NetworkGenerationId) {
        self.generation = generation;
    }
}

impl Default for MockNetworkReader {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkReader for MockNetworkReader {
    fn lane(&self, id: LaneId) -> Option<&Lane> {
        self.lanes.get(id.index())
    }

    fn connector(&self, id: ConnectorId) -> Option<&Connector> {
        self.connectors.get(id.index())
    }

    fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.index())
    }

    fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    fn connector_count(&self) -> usize {
        self.connectors.len()
    }

    fn agent_count(&self) -> usize {
        self.agents.len()
    }

    fn generation(&self) -> NetworkGenerationId {
        self.generation
    }
}
