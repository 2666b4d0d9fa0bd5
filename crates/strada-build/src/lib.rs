//! Lane-graph construction and agent seeding for Strada.
//!
//! Everything here stages into a [`StagedBatch`](strada_arena::StagedBatch);
//! nothing writes committed state. The driver in `strada-engine` decides
//! which of these to run and commits the result.
//!
//! # Pipeline (one build)
//!
//! 1. [`build_generator_network`] or [`build_demo_network`] stages lanes
//!    and connectors
//! 2. [`seed_agents`] stages agents on chosen lanes, drawing colours from
//!    a seeded RNG
//! 3. The caller commits the batch, or drops it on error

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod builder;
pub mod demo;
pub mod generator;
pub mod placement;

pub use builder::{build_junction, lane_pair, validate_junction, BuiltJunction};
pub use demo::{build_demo_network, DemoNetwork, DEMO_POSITIONS};
pub use generator::{build_generator_network, ArityTally, GeneratedNetwork};
pub use placement::{random_color, seed_agents, PlacementPolicy};
