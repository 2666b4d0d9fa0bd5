//! Reusable input fixtures.
//!
//! - [`spawn_request`]: a request with distinct template IDs.
//! - [`junction_of_arity`]: a junction with `n` straight neighbour segments.
//! - [`chain_network`]: a dead-end, merges, dead-end road.
//! - [`star_network`]: one triple junction with three dead-end arms.

use glam::Vec3;
use strada_core::{ConnectorTemplates, Junction, SplineSegment, SpawnRequest, TemplateId};

/// Template IDs used by [`spawn_request`].
pub const DEAD_END_TEMPLATE: TemplateId = TemplateId(100);
pub const MERGE_TEMPLATE: TemplateId = TemplateId(101);
pub const TRIPLE_TEMPLATE: TemplateId = TemplateId(102);
pub const CAR_TEMPLATE: TemplateId = TemplateId(200);

pub fn spawn_request() -> SpawnRequest {
    SpawnRequest {
        connectors: ConnectorTemplates {
            dead_end: DEAD_END_TEMPLATE,
            merge: MERGE_TEMPLATE,
            triple: TRIPLE_TEMPLATE,
        },
        car: CAR_TEMPLATE,
    }
}

/// A junction at `position` with `n` straight segments fanning out in the
/// xz-plane, each `length` long. `n` may be outside `1..=3`.
pub fn junction_of_arity(position: Vec3, n: usize, length: f32) -> Junction {
    let segments = (0..n).map(|i| {
        let angle = i as f32 * std::f32::consts::TAU / n.max(1) as f32;
        let dir = Vec3::new(angle.cos(), 0.0, angle.sin());
        SplineSegment::straight(position, position + dir * length)
    });
    Junction::new(position, segments)
}

/// A straight road along +x with `junctions` stops spaced `spacing` apart.
///
/// Both ends are dead-ends; every interior stop is a merge. Each junction
/// lists the segments touching it, so a shared road appears once per end.
/// Needs at least two junctions.
pub fn chain_network(junctions: usize, spacing: f32) -> Vec<Junction> {
    assert!(junctions >= 2, "a chain needs two ends");
    let at = |i: usize| Vec3::new(i as f32 * spacing, 0.0, 0.0);
    (0..junctions)
        .map(|i| {
            let mut segments = Vec::with_capacity(2);
            if i > 0 {
                segments.push(SplineSegment::straight(at(i), at(i - 1)));
            }
            if i + 1 < junctions {
                segments.push(SplineSegment::straight(at(i), at(i + 1)));
            }
            Junction::new(at(i), segments)
        })
        .collect()
}

/// A triple junction at the origin with three dead-end arms of `arm` length.
pub fn star_network(arm: f32) -> Vec<Junction> {
    let hub = junction_of_arity(Vec3::ZERO, 3, arm);
    let mut junctions = vec![hub.clone()];
    for seg in &hub.neighbor_splines {
        junctions.push(Junction::new(
            seg.end_point,
            [SplineSegment::new(seg.end_point, seg.start_point, seg.measured_length)],
        ));
    }
    junctions
}
