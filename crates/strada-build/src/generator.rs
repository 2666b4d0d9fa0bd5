//! Generator-mode network assembly.
//!
//! Builds every junction produced by the upstream road generator into one
//! batch, seeding a single agent at the start of each dead-end's forward
//! lane.

use rand::Rng;
use smallvec::SmallVec;
use strada_arena::StagedBatch;
use strada_core::{
    AgentId, BuildError, Junction, JunctionArity, JunctionId, LaneId, SpawnRequest,
};

use crate::builder::{build_junction, validate_junction};
use crate::placement::{seed_agents, PlacementPolicy};

/// Per-arity connector counts for one build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArityTally {
    /// Dead-end connectors.
    pub dead_ends: u32,
    /// Merge connectors.
    pub merges: u32,
    /// Triple connectors.
    pub triples: u32,
}

impl ArityTally {
    /// Count one more connector of `arity`.
    pub fn record(&mut self, arity: JunctionArity) {
        match arity {
            JunctionArity::DeadEnd => self.dead_ends += 1,
            JunctionArity::Merge => self.merges += 1,
            JunctionArity::Triple => self.triples += 1,
        }
    }

    /// Total connectors counted.
    pub fn total(&self) -> u32 {
        self.dead_ends + self.merges + self.triples
    }
}

/// Result of staging a generator network.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GeneratedNetwork {
    /// Lanes staged for each junction, indexed like the input slice.
    pub junction_lanes: Vec<SmallVec<[LaneId; 6]>>,
    /// Agents staged, in junction order.
    pub agents: Vec<AgentId>,
    /// Connector counts by arity.
    pub tally: ArityTally,
}

/// Stage the lanes, connectors and dead-end agents for `junctions`.
///
/// Every junction is validated before the first one is staged, so on
/// error the batch holds nothing from this call.
pub fn build_generator_network<R: Rng + ?Sized>(
    junctions: &[Junction],
    request: &SpawnRequest,
    batch: &mut StagedBatch,
    rng: &mut R,
) -> Result<GeneratedNetwork, BuildError> {
    for (i, junction) in junctions.iter().enumerate() {
        validate_junction(JunctionId(i as u32), junction)?;
    }

    let mut network = GeneratedNetwork {
        junction_lanes: Vec::with_capacity(junctions.len()),
        ..GeneratedNetwork::default()
    };
    for (i, junction) in junctions.iter().enumerate() {
        let built = build_junction(JunctionId(i as u32), junction, &request.connectors, batch)?;
        network.tally.record(built.arity);

        if built.arity == JunctionArity::DeadEnd {
            if let Some(lane_a0) = built.lane_a(0) {
                let length = junction.neighbor_splines[0].measured_length;
                let agents = seed_agents(
                    batch,
                    lane_a0,
                    length,
                    1,
                    &PlacementPolicy::LaneStart,
                    request.car,
                    rng,
                )?;
                network.agents.extend(agents);
            }
        }
        network.junction_lanes.push(built.lanes);
    }
    Ok(network)
}
