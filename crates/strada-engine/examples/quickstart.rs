//! Strada Quickstart: build both kinds of network from scratch.
//!
//! Demonstrates:
//!   1. Describing junctions as neighbour spline segments
//!   2. Building a DriverConfig and LockstepNetwork in generator mode
//!   3. Submitting a spawn request and stepping
//!   4. Reading lanes, connectors and agents back from the snapshot
//!   5. Building the fixed demonstration network
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example quickstart

use glam::Vec3;
use strada_core::{
    ConnectorKind, ConnectorTemplates, Junction, JunctionArity, NetworkReader, SpawnRequest,
    SplineSegment, TemplateId,
};
use strada_engine::{DriverConfig, LockstepNetwork, TickOutcome};

// ─── Templates ──────────────────────────────────────────────────

const REQUEST: SpawnRequest = SpawnRequest {
    connectors: ConnectorTemplates {
        dead_end: TemplateId(0),
        merge: TemplateId(1),
        triple: TemplateId(2),
    },
    car: TemplateId(10),
};

// ─── Road layout ────────────────────────────────────────────────
//
//   west ──── hub ──── east
//              │
//            south
//
// Each junction lists the segments leaving it, so a road between two
// junctions appears once at each end.

fn junctions() -> Vec<Junction> {
    let hub = Vec3::ZERO;
    let west = Vec3::new(-20.0, 0.0, 0.0);
    let east = Vec3::new(20.0, 0.0, 0.0);
    let south = Vec3::new(0.0, 0.0, -15.0);
    let road = SplineSegment::straight;

    vec![
        Junction::new(hub, [road(hub, west), road(hub, east), road(hub, south)]),
        Junction::new(west, [road(west, hub)]),
        Junction::new(east, [road(east, hub)]),
        Junction::new(south, [road(south, hub)]),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // ── Generator mode ──────────────────────────────────────────
    let mut network = LockstepNetwork::new(DriverConfig::generator(42), junctions())?;

    let idle = network.step_sync(vec![])?;
    println!("tick without request: {:?}", idle.outcome);

    let result = network.step_sync(vec![REQUEST])?;
    if let TickOutcome::Committed(report) = &result.outcome {
        println!(
            "request {} committed as generation {}",
            report.request, report.generation
        );
    }

    let snap = result.snapshot;
    println!(
        "{} lanes, {} connectors, {} agents",
        snap.lane_count(),
        snap.connector_count(),
        snap.agent_count()
    );
    for (id, connector) in snap.connectors() {
        let kind = match connector.kind {
            ConnectorKind::DeadEnd(_) => "dead-end",
            ConnectorKind::Merge(_) => "merge",
            ConnectorKind::Triple(_) => "triple",
        };
        println!("  connector {id}: {kind} at {}", connector.position);
    }
    for (id, agent) in snap.agents() {
        println!(
            "  agent {id}: lane {} offset {:.1} colour {:?}",
            agent.lane, agent.position_along_lane, agent.color
        );
    }
    for (i, junction) in network.driver().junctions().iter().enumerate() {
        println!("  junction {i}: lanes {:?}", junction.lane_entities);
    }

    // ── Fixed demonstration network ─────────────────────────────
    let mut demo = LockstepNetwork::new(DriverConfig::default(), Vec::new())?;
    let result = demo.step_sync(vec![REQUEST])?;
    let snap = result.snapshot;
    println!(
        "demo: {} lanes, {} dead-ends, {} merges, {} triples, {} agents",
        snap.lane_count(),
        snap.connectors_of(JunctionArity::DeadEnd).count(),
        snap.connectors_of(JunctionArity::Merge).count(),
        snap.connectors_of(JunctionArity::Triple).count(),
        snap.agent_count()
    );
    let m = demo.last_metrics();
    println!("demo build {}us, commit {}us", m.build_us, m.commit_us);

    Ok(())
}
