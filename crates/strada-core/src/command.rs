//! Build commands, spawn requests, and submission receipts.

use crate::error::IngressError;
use crate::id::{AgentId, ConnectorId, LaneId, SpawnRequestId, TemplateId};
use crate::network::{Agent, Connector, Lane};

/// A single creation operation recorded into a staged batch.
///
/// Batches are applied in command order at commit. Each command carries
/// the ID that was handed out when it was staged; commit checks that the
/// ID lands exactly where the arena will put it.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use strada_core::{BuildCommand, Lane, LaneId};
///
/// let cmd = BuildCommand::CreateLane {
///     id: LaneId(0),
///     lane: Lane::new(Vec3::ZERO, Vec3::X, 1.0),
/// };
/// assert!(matches!(cmd, BuildCommand::CreateLane { .. }));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum BuildCommand {
    /// Create a lane.
    CreateLane {
        /// The ID the lane will have once committed.
        id: LaneId,
        /// The lane record.
        lane: Lane,
    },
    /// Create a junction connector.
    CreateConnector {
        /// The ID the connector will have once committed.
        id: ConnectorId,
        /// The connector record.
        connector: Connector,
    },
    /// Create an agent and append it to its lane's agent list.
    CreateAgent {
        /// The ID the agent will have once committed.
        id: AgentId,
        /// The agent record. `agent.lane` names the owning lane.
        agent: Agent,
    },
}

/// Templates used to instantiate the three connector variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectorTemplates {
    /// Template for dead-end connectors.
    pub dead_end: TemplateId,
    /// Template for merge connectors.
    pub merge: TemplateId,
    /// Template for triple connectors.
    pub triple: TemplateId,
}

/// One-shot trigger causing the network to be built exactly once.
///
/// # Examples
///
/// ```
/// use strada_core::{ConnectorTemplates, SpawnRequest, TemplateId};
///
/// let request = SpawnRequest {
///     connectors: ConnectorTemplates {
///         dead_end: TemplateId(0),
///         merge: TemplateId(1),
///         triple: TemplateId(2),
///     },
///     car: TemplateId(3),
/// };
/// assert_eq!(request.car, TemplateId(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnRequest {
    /// Connector templates.
    pub connectors: ConnectorTemplates,
    /// Agent template.
    pub car: TemplateId,
}

/// Receipt returned for each submitted spawn request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnReceipt {
    /// Whether the request was queued.
    pub accepted: bool,
    /// The ID assigned to the request, if it was queued.
    pub request_id: Option<SpawnRequestId>,
    /// Why the request was rejected, if it was.
    pub reason_code: Option<IngressError>,
}
