//! Read-only access to a committed network.

use crate::id::{AgentId, ConnectorId, LaneId, NetworkGenerationId};
use crate::network::{Agent, Connector, Lane};

/// Read-only access to a published network generation.
///
/// This trait decouples consumers (movement, right-of-way, presentation)
/// from the arena implementation. Lookups return `None` for IDs that are
/// not committed in this generation.
pub trait NetworkReader {
    /// Look up a lane.
    fn lane(&self, id: LaneId) -> Option<&Lane>;

    /// Look up a connector.
    fn connector(&self, id: ConnectorId) -> Option<&Connector>;

    /// Look up an agent.
    fn agent(&self, id: AgentId) -> Option<&Agent>;

    /// Number of committed lanes.
    fn lane_count(&self) -> usize;

    /// Number of committed connectors.
    fn connector_count(&self) -> usize;

    /// Number of committed agents.
    fn agent_count(&self) -> usize;

    /// The generation this view was published at.
    fn generation(&self) -> NetworkGenerationId;
}
