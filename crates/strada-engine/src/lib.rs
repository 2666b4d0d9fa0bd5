//! Network assembly driver for Strada.
//!
//! Provides the [`NetworkDriver`] that turns spawn requests into committed
//! lane networks, one request per tick, and the [`LockstepNetwork`]
//! facade that submits, ticks and snapshots in one call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod ingress;
pub mod lockstep;
pub mod metrics;
pub mod tick;

pub use config::{BuildMode, ConfigError, DriverConfig, DuplicatePolicy};
pub use ingress::SpawnQueue;
pub use lockstep::{LockstepNetwork, StepResult};
pub use metrics::BuildMetrics;
pub use tick::{CommitReport, DriverState, NetworkDriver, StepError, TickError, TickOutcome};
