//! Strada: a lane-graph builder for road networks.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Strada sub-crates. For most users, adding `strada` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use glam::Vec3;
//! use strada::prelude::*;
//!
//! let request = SpawnRequest {
//!     connectors: ConnectorTemplates {
//!         dead_end: TemplateId(0),
//!         merge: TemplateId(1),
//!         triple: TemplateId(2),
//!     },
//!     car: TemplateId(10),
//! };
//!
//! // One road between two dead-ends.
//! let a = Vec3::ZERO;
//! let b = Vec3::new(10.0, 0.0, 0.0);
//! let junctions = vec![
//!     Junction::new(a, [SplineSegment::straight(a, b)]),
//!     Junction::new(b, [SplineSegment::straight(b, a)]),
//! ];
//!
//! let mut network = LockstepNetwork::new(DriverConfig::generator(42), junctions).unwrap();
//! let result = network.step_sync(vec![request]).unwrap();
//! assert!(matches!(result.outcome, TickOutcome::Committed(_)));
//! assert_eq!(result.snapshot.lane_count(), 4);
//! assert_eq!(result.snapshot.connector_count(), 2);
//! assert_eq!(result.snapshot.agent_count(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strada-core` | IDs, geometry, network elements, requests, errors |
//! | [`arena`] | `strada-arena` | Network storage, `NetworkSnapshot`, `OwnedSnapshot` |
//! | [`build`] | `strada-build` | Junction wiring, agent placement, demo network |
//! | [`engine`] | `strada-engine` | Spawn queue and the assembly driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`strada-core`).
///
/// Contains junction geometry, lanes, connectors, agents, spawn requests,
/// error types, and the [`types::NetworkReader`] trait.
pub use strada_core as types;

/// Network storage and snapshots (`strada-arena`).
///
/// Most users only need [`arena::NetworkSnapshot`] and
/// [`arena::OwnedSnapshot`] from this module; both are also in the
/// [`prelude`].
pub use strada_arena as arena;

/// Lane-graph construction (`strada-build`).
///
/// [`build::build_junction`] wires one junction into a staged batch,
/// [`build::build_demo_network`] stages the fixed demonstration network.
pub use strada_build as build;

/// Assembly driver (`strada-engine`).
///
/// [`engine::LockstepNetwork`] for synchronous stepping,
/// [`engine::NetworkDriver`] for direct control over submission and ticks.
pub use strada_engine as engine;

/// Common imports for typical Strada usage.
///
/// ```rust
/// use strada::prelude::*;
/// ```
///
/// This imports junction geometry, spawn requests, the read trait,
/// snapshots, and the lockstep driver with its configuration.
pub mod prelude {
    // Snapshots
    pub use strada_arena::{NetworkSnapshot, OwnedSnapshot};

    // Core types and traits
    pub use strada_core::{
        Agent, Connector, ConnectorKind, ConnectorTemplates, Junction, JunctionArity, Lane,
        NetworkReader, SpawnReceipt, SpawnRequest, SpawnRequestId, SplineSegment, TemplateId,
    };

    // Errors
    pub use strada_core::{BuildError, IngressError};

    // Engine
    pub use strada_engine::{
        BuildMetrics, BuildMode, DriverConfig, DuplicatePolicy, LockstepNetwork, StepResult,
        TickError, TickOutcome,
    };
}
