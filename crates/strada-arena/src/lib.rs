//! Append-only network arenas with staged, atomic batch commit.
//!
//! Lanes, connectors and agents each live in their own arena and are
//! addressed by index. Construction never writes to the arenas directly:
//! it records [`BuildCommand`](strada_core::BuildCommand)s into a private
//! [`StagedBatch`], and [`NetworkArena::commit`] either applies the whole
//! batch or none of it.
//!
//! # Architecture
//!
//! ```text
//! NetworkArena (orchestrator)
//! ├── Vec<Lane>       ←─── lane arena, LaneId = index
//! ├── Vec<Connector>  ←─── connector arena, ConnectorId = index
//! ├── Vec<Agent>      ←─── agent arena, AgentId = index
//! └── generation      ←─── bumped on every successful commit
//!
//! StagedBatch (private to one build)
//! ├── basis generation + committed lengths at open time
//! └── Vec<BuildCommand>, IDs = committed_len + staged ordinal
//! ```
//!
//! Because staged IDs are allocated behind the committed entities, commit
//! is validate-then-append: nothing is renumbered, and a failed
//! validation leaves the arenas untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod network;
pub mod read;
pub mod staging;

// Public re-exports for the primary API surface.
pub use config::ArenaConfig;
pub use error::{ArenaError, EntityKind};
pub use network::NetworkArena;
pub use read::{NetworkSnapshot, OwnedSnapshot};
pub use staging::StagedBatch;
