//! Benchmark profiles and utilities for the Strada lane-graph builder.
//!
//! Provides pre-built driver profiles for benchmarking:
//!
//! - [`reference_profile`]: ladder network with 1K rungs (~2K junctions)
//! - [`stress_profile`]: ladder network with 10K rungs (~20K junctions)
//! - [`ladder_network`]: the junction layout both profiles use

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use glam::Vec3;
use strada_core::{Junction, SplineSegment};
use strada_engine::DriverConfig;

/// Build a reference benchmark profile: 1_000 rungs.
///
/// 4 dead-ends and 2_000 triples; 12_008 lanes and 4 agents per build.
pub fn reference_profile(seed: u64) -> (DriverConfig, Vec<Junction>) {
    (DriverConfig::generator(seed), ladder_network(1_000, 10.0))
}

/// Build a stress benchmark profile: 10_000 rungs.
///
/// Same layout as [`reference_profile`] at 10x the size.
pub fn stress_profile(seed: u64) -> (DriverConfig, Vec<Junction>) {
    (DriverConfig::generator(seed), ladder_network(10_000, 10.0))
}

/// A two-rail ladder with `rungs` rungs, plus a one-segment stub past
/// each end of each rail.
///
/// Every rail junction touches its two rail neighbours and its rung, so
/// is a triple; the four stub tips are dead-ends. Rails run along `+x`,
/// `spacing` apart in both directions.
pub fn ladder_network(rungs: usize, spacing: f32) -> Vec<Junction> {
    let last = rungs as isize;
    let node = |rail: usize, col: isize| Vec3::new(col as f32 * spacing, 0.0, rail as f32 * spacing);

    let mut junctions = Vec::with_capacity(2 * (rungs + 2));
    for rail in 0..2 {
        // Columns -1 and `rungs` are the stub tips.
        for col in -1..=last {
            let here = node(rail, col);
            let road = |to: Vec3| SplineSegment::straight(here, to);
            let mut segments = Vec::with_capacity(3);
            if col > -1 {
                segments.push(road(node(rail, col - 1)));
            }
            if col < last {
                segments.push(road(node(rail, col + 1)));
            }
            if (0..last).contains(&col) {
                segments.push(road(node(1 - rail, col)));
            }
            junctions.push(Junction::new(here, segments));
        }
    }
    junctions
}

#[cfg(test)]
mod tests {
    use super::*;
    use strada_core::JunctionArity;

    #[test]
    fn reference_profile_validates() {
        let (config, junctions) = reference_profile(42);
        config.validate().unwrap();
        assert_eq!(junctions.len(), 2_004);
    }

    #[test]
    fn ladder_arities() {
        let junctions = ladder_network(3, 1.0);
        let count = |arity| junctions.iter().filter(|j| j.arity() == Some(arity)).count();
        assert_eq!(count(JunctionArity::DeadEnd), 4);
        assert_eq!(count(JunctionArity::Merge), 0);
        assert_eq!(count(JunctionArity::Triple), 6);
    }

    #[test]
    fn single_rung_ladder_is_buildable() {
        let junctions = ladder_network(1, 1.0);
        assert!(junctions.iter().all(|j| j.arity().is_some()));
    }

    #[test]
    fn ladder_is_deterministic() {
        assert_eq!(ladder_network(50, 2.5), ladder_network(50, 2.5));
    }
}
