//! Core types and traits for the Strada lane-graph builder.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Strada workspace:
//! typed IDs, the geometric input records (spline segments and
//! junctions), the committed network records (lanes, connectors,
//! agents), the build command list, error types, and read traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod geometry;
pub mod id;
pub mod network;
pub mod traits;

pub use command::{BuildCommand, ConnectorTemplates, SpawnReceipt, SpawnRequest};
pub use error::{BuildError, IngressError, SegmentError};
pub use geometry::{Junction, JunctionArity, SplineSegment};
pub use id::{
    AgentId, ConnectorId, JunctionId, LaneId, NetworkGenerationId, SpawnRequestId, TemplateId,
    TickId,
};
pub use network::{
    Agent, Connector, ConnectorKind, DeadEnd, Lane, Merge, Triple, DIRECTION_UNDETERMINED,
};
pub use traits::NetworkReader;
