//! The fixed demonstration network, end to end through the driver.

use glam::Vec3;
use strada_core::{ConnectorKind, JunctionArity, NetworkReader};
use strada_engine::{DriverConfig, LockstepNetwork, TickOutcome};
use strada_test_utils::fixtures::{CAR_TEMPLATE, DEAD_END_TEMPLATE, MERGE_TEMPLATE};
use strada_test_utils::spawn_request;

fn built() -> LockstepNetwork {
    let mut network = LockstepNetwork::new(DriverConfig::default(), Vec::new()).unwrap();
    let result = network.step_sync(vec![spawn_request()]).unwrap();
    assert!(matches!(result.outcome, TickOutcome::Committed(_)));
    network
}

#[test]
fn eight_lanes_five_connectors_four_agents() {
    let network = built();
    let snap = network.snapshot();
    assert_eq!(snap.lane_count(), 8);
    assert_eq!(snap.connectors_of(JunctionArity::DeadEnd).count(), 3);
    assert_eq!(snap.connectors_of(JunctionArity::Merge).count(), 1);
    assert_eq!(snap.connectors_of(JunctionArity::Triple).count(), 1);
    assert_eq!(snap.agent_count(), 4);
}

#[test]
fn connectors_sit_on_the_five_positions() {
    let network = built();
    let snap = network.snapshot();
    let at = |arity| {
        snap.connectors_of(arity)
            .map(|(_, c)| c.position)
            .collect::<Vec<_>>()
    };
    assert_eq!(
        at(JunctionArity::DeadEnd),
        vec![
            Vec3::new(-5.0, 0.0, 0.0),
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(5.0, 0.0, 5.0),
        ]
    );
    assert_eq!(at(JunctionArity::Merge), vec![Vec3::ZERO]);
    assert_eq!(at(JunctionArity::Triple), vec![Vec3::new(5.0, 0.0, 0.0)]);
}

#[test]
fn templates_come_from_the_request() {
    let network = built();
    let snap = network.snapshot();
    for (_, c) in snap.connectors_of(JunctionArity::DeadEnd) {
        assert_eq!(c.template, DEAD_END_TEMPLATE);
    }
    for (_, c) in snap.connectors_of(JunctionArity::Merge) {
        assert_eq!(c.template, MERGE_TEMPLATE);
    }
    assert!(snap.agents().all(|(_, a)| a.template == CAR_TEMPLATE));
}

#[test]
fn two_agents_each_on_a0_and_b3() {
    let network = built();
    let snap = network.snapshot();
    let occupied: Vec<_> = snap
        .lanes()
        .filter(|(_, l)| !l.agents.is_empty())
        .map(|(id, l)| (id, l.agents.len()))
        .collect();
    assert_eq!(occupied.len(), 2);
    assert!(occupied.iter().all(|&(_, n)| n == 2));

    // A0 runs pos0 → pos1 on the -z side; B3 runs pos4 → pos2 on the -x side.
    let a0 = snap.lane(occupied[0].0).unwrap();
    assert_eq!(a0.start_pos, Vec3::new(-5.0, 0.0, -0.5));
    let b3 = snap.lane(occupied[1].0).unwrap();
    assert_eq!(b3.end_pos, Vec3::new(4.5, 0.0, 0.0));

    for (id, _) in occupied {
        let offsets: Vec<f32> = snap
            .agents_on(id)
            .map(|(_, a)| a.position_along_lane)
            .collect();
        assert_eq!(offsets, vec![10.0, 5.0]);
    }
}

#[test]
fn triple_flags_are_never_resolved() {
    let network = built();
    let snap = network.snapshot();
    let (_, triple) = snap.connectors_of(JunctionArity::Triple).next().unwrap();
    let ConnectorKind::Triple(t) = triple.kind else {
        unreachable!()
    };
    assert_eq!(t.directions(), [-1, -1, -1]);
}

#[test]
fn merge_links_the_two_roads() {
    let network = built();
    let snap = network.snapshot();
    let (_, merge) = snap.connectors_of(JunctionArity::Merge).next().unwrap();
    let ConnectorKind::Merge(m) = merge.kind else {
        unreachable!()
    };
    // Inbound lanes end at the merge, outbound lanes start there.
    for lane in [m.lane_in0, m.lane_in1] {
        assert_eq!(snap.lane(lane).unwrap().end_pos.x, 0.0);
    }
    for lane in [m.lane_out0, m.lane_out1] {
        assert_eq!(snap.lane(lane).unwrap().start_pos.x, 0.0);
    }
}
