//! Read-only views of a committed network generation.
//!
//! [`NetworkSnapshot`] borrows the arenas of a [`crate::NetworkArena`];
//! [`OwnedSnapshot`] owns a copy and can cross threads. Both implement
//! [`NetworkReader`].

use strada_core::{
    Agent, AgentId, Connector, ConnectorId, JunctionArity, Lane, LaneId, NetworkGenerationId,
    NetworkReader,
};

/// A borrowed, read-only view of the committed network.
///
/// The snapshot cannot outlive the arena, and while it exists no commit
/// can take place, so everything it shows belongs to one generation.
#[derive(Clone, Copy, Debug)]
pub struct NetworkSnapshot<'a> {
    lanes: &'a [Lane],
    connectors: &'a [Connector],
    agents: &'a [Agent],
    generation: NetworkGenerationId,
}

impl<'a> NetworkSnapshot<'a> {
    pub(crate) fn new(
        lanes: &'a [Lane],
        connectors: &'a [Connector],
        agents: &'a [Agent],
        generation: NetworkGenerationId,
    ) -> Self {
        Self {
            lanes,
            connectors,
            agents,
            generation,
        }
    }

    /// All lanes with their IDs, in ID order.
    pub fn lanes(&self) -> impl Iterator<Item = (LaneId, &'a Lane)> + 'a {
        self.lanes
            .iter()
            .enumerate()
            .map(|(i, l)| (LaneId(i as u32), l))
    }

    /// All connectors with their IDs, in ID order.
    pub fn connectors(&self) -> impl Iterator<Item = (ConnectorId, &'a Connector)> + 'a {
        self.connectors
            .iter()
            .enumerate()
            .map(|(i, c)| (ConnectorId(i as u32), c))
    }

    /// All agents with their IDs, in ID order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &'a Agent)> + 'a {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    /// Agents owned by `lane`, in spawn order. Empty for unknown lanes.
    pub fn agents_on(&self, lane: LaneId) -> impl Iterator<Item = (AgentId, &'a Agent)> + 'a {
        let agents = self.agents;
        self.lanes
            .get(lane.index())
            .map(|l| l.agents.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |&id| agents.get(id.index()).map(|a| (id, a)))
    }

    /// Connectors of the given arity, in ID order.
    pub fn connectors_of(
        &self,
        arity: JunctionArity,
    ) -> impl Iterator<Item = (ConnectorId, &'a Connector)> + 'a {
        self.connectors().filter(move |(_, c)| c.arity() == arity)
    }

    /// Copy this view into an [`OwnedSnapshot`].
    pub fn to_owned_snapshot(&self) -> OwnedSnapshot {
        OwnedSnapshot::new(
            self.lanes.to_vec(),
            self.connectors.to_vec(),
            self.agents.to_vec(),
            self.generation,
        )
    }
}

impl NetworkReader for NetworkSnapshot<'_> {
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

// ── OwnedSnapshot ───────────────────────────────────────────────

/// An owned copy of a committed generation.
///
/// Independent of the arena it was taken from: later commits or a reset
/// do not affect it. `Send + Sync`, so it can be handed to other threads.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedSnapshot {
    lanes: Vec<Lane>,
    connectors: Vec<Connector>,
    agents: Vec<Agent>,
    generation: NetworkGenerationId,
}

// Compile-time assertion: OwnedSnapshot must be Send + Sync.
const _: () = {
    fn assert<T: Send + Sync>() {}
    let _ = assert::<OwnedSnapshot>;
};

impl OwnedSnapshot {
    pub(crate) fn new(
        lanes: Vec<Lane>,
        connectors: Vec<Connector>,
        agents: Vec<Agent>,
        generation: NetworkGenerationId,
    ) -> Self {
        Self {
            lanes,
            connectors,
            agents,
            generation,
        }
    }

    /// Borrow as a [`NetworkSnapshot`] to use the iterator helpers.
    pub fn view(&self) -> NetworkSnapshot<'_> {
        NetworkSnapshot::new(&self.lanes, &self.connectors, &self.agents, self.generation)
    }
}

impl NetworkReader for OwnedSnapshot {
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
