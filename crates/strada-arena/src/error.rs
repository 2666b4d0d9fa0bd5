//! Arena-specific error types.

use std::fmt;

use strada_core::{LaneId, NetworkGenerationId};
use thiserror::Error;

/// Which arena an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The lane arena.
    Lane,
    /// The connector arena.
    Connector,
    /// The agent arena.
    Agent,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lane => write!(f, "lane"),
            Self::Connector => write!(f, "connector"),
            Self::Agent => write!(f, "agent"),
        }
    }
}

/// Errors that can occur while configuring an arena or committing a batch.
///
/// Every commit error is raised before the first arena write, so a failed
/// commit leaves the network exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Committing would exceed an arena's configured capacity.
    #[error("{kind} arena capacity exceeded: requested {requested}, capacity {capacity}")]
    CapacityExceeded {
        /// The arena that would overflow.
        kind: EntityKind,
        /// Total entities after the commit.
        requested: usize,
        /// Configured cap.
        capacity: usize,
    },
    /// The batch was opened against a generation that is no longer current.
    #[error("stale batch: opened at generation {batch_generation}, arena at {current}")]
    StaleBatch {
        /// Generation the batch was opened against.
        batch_generation: NetworkGenerationId,
        /// Current arena generation.
        current: NetworkGenerationId,
    },
    /// A staged command's ID does not match where commit would place it.
    #[error("{kind} id mismatch: staged as {staged}, commit position {expected}")]
    IdMismatch {
        /// The arena concerned.
        kind: EntityKind,
        /// ID recorded in the command.
        staged: u32,
        /// Position the entity would actually take.
        expected: u32,
    },
    /// A connector or agent references a lane that would not exist after
    /// the commit.
    #[error("{referrer} references unknown lane {lane}")]
    DanglingLane {
        /// The missing lane.
        lane: LaneId,
        /// Which kind of record holds the reference.
        referrer: EntityKind,
    },
    /// Arena configuration is invalid.
    #[error("invalid arena config: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
