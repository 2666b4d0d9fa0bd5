//! The fixed five-junction demonstration network.
//!
//! ```text
//!                 pos4 (5,0,5)
//!                   │  A3 ↑  B3 ↓
//!   pos0 ──A0/B0── pos1 ──A1/B1── pos2 ──A2/B2── pos3
//!  (-5,0,0)       (0,0,0)        (5,0,0)        (10,0,0)
//! ```
//!
//! Lanes on the x-axis run half a unit either side of the road centre
//! (A on the `-z` side heading `+x`, B on the `+z` side heading `-x`);
//! the branch to pos4 is offset along `x`. Every lane is 10 units long.
//! Dead-ends are tinted red (pos0), green (pos3) and blue (pos4).

use glam::{Vec3, Vec4};
use rand::Rng;
use strada_arena::StagedBatch;
use strada_core::{
    AgentId, BuildError, Connector, ConnectorId, ConnectorKind, DeadEnd, Lane, LaneId, Merge,
    SpawnRequest, Triple, DIRECTION_UNDETERMINED,
};

use crate::generator::ArityTally;
use crate::placement::{seed_agents, PlacementPolicy};

/// Junction positions, pos0 through pos4.
pub const DEMO_POSITIONS: [Vec3; 5] = [
    Vec3::new(-5.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(5.0, 0.0, 0.0),
    Vec3::new(10.0, 0.0, 0.0),
    Vec3::new(5.0, 0.0, 5.0),
];

/// Distance of each lane from its road centreline.
pub const LANE_OFFSET: f32 = 0.5;

/// Length assigned to every demo lane.
pub const DEMO_LANE_LENGTH: f32 = 10.0;

/// Agents seeded on each of A0 and B3.
pub const AGENTS_PER_SEEDED_LANE: usize = 2;

const FORWARD: Vec3 = Vec3::new(0.0, 0.0, LANE_OFFSET);
const BACK: Vec3 = Vec3::new(0.0, 0.0, -LANE_OFFSET);
const LEFT: Vec3 = Vec3::new(-LANE_OFFSET, 0.0, 0.0);
const RIGHT: Vec3 = Vec3::new(LANE_OFFSET, 0.0, 0.0);

const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);
const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);
const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

/// IDs staged for the demo network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoNetwork {
    /// Lanes in `A0, B0, A1, B1, A2, B2, A3, B3` order.
    pub lanes: [LaneId; 8],
    /// Connectors at pos0 through pos4.
    pub connectors: [ConnectorId; 5],
    /// Agents: two on A0, then two on B3.
    pub agents: Vec<AgentId>,
    /// Connector counts by arity.
    pub tally: ArityTally,
}

/// Stage the demo network.
///
/// Colours are drawn from `rng` for the A0 agents first, then the B3
/// agents.
pub fn build_demo_network<R: Rng + ?Sized>(
    request: &SpawnRequest,
    batch: &mut StagedBatch,
    rng: &mut R,
) -> Result<DemoNetwork, BuildError> {
    let [p0, p1, p2, p3, p4] = DEMO_POSITIONS;
    let lane = |start: Vec3, end: Vec3| Lane::new(start, end, DEMO_LANE_LENGTH);
    let mut agents = Vec::with_capacity(AGENTS_PER_SEEDED_LANE * 2);

    let a0 = batch.stage_lane(lane(p0 + BACK, p1 + BACK));
    agents.extend(seed_queue(batch, a0, request, rng)?);
    let b0 = batch.stage_lane(lane(p1 + FORWARD, p0 + FORWARD));
    let a1 = batch.stage_lane(lane(p1 + BACK, p2 + BACK));
    let b1 = batch.stage_lane(lane(p2 + FORWARD, p1 + FORWARD));
    let a2 = batch.stage_lane(lane(p2 + BACK, p3 + BACK));
    let b2 = batch.stage_lane(lane(p3 + FORWARD, p2 + FORWARD));
    let a3 = batch.stage_lane(lane(p2 + RIGHT, p4 + RIGHT));
    let b3 = batch.stage_lane(lane(p4 + LEFT, p2 + LEFT));
    agents.extend(seed_queue(batch, b3, request, rng)?);

    let templates = &request.connectors;
    let mut tally = ArityTally::default();
    let mut stage = |kind: ConnectorKind, position: Vec3, tint: Option<Vec4>| {
        tally.record(kind.arity());
        let template = match kind {
            ConnectorKind::DeadEnd(_) => templates.dead_end,
            ConnectorKind::Merge(_) => templates.merge,
            ConnectorKind::Triple(_) => templates.triple,
        };
        let mut connector = Connector::new(kind, position, template);
        connector.tint = tint;
        batch.stage_connector(connector)
    };

    let connectors = [
        stage(
            ConnectorKind::DeadEnd(DeadEnd {
                lane_in0: b0,
                lane_out0: a0,
            }),
            p0,
            Some(RED),
        ),
        stage(
            ConnectorKind::Merge(Merge {
                lane_in0: a0,
                lane_out0: b0,
                lane_in1: b1,
                lane_out1: a1,
            }),
            p1,
            None,
        ),
        stage(
            ConnectorKind::Triple(Triple {
                lane_in0: a1,
                lane_out0: b1,
                lane_in1: b2,
                lane_out1: a2,
                lane_in2: b3,
                lane_out2: a3,
                lane0_direction: DIRECTION_UNDETERMINED,
                lane1_direction: DIRECTION_UNDETERMINED,
                lane2_direction: DIRECTION_UNDETERMINED,
            }),
            p2,
            None,
        ),
        stage(
            ConnectorKind::DeadEnd(DeadEnd {
                lane_in0: a2,
                lane_out0: b2,
            }),
            p3,
            Some(GREEN),
        ),
        stage(
            ConnectorKind::DeadEnd(DeadEnd {
                lane_in0: a3,
                lane_out0: b3,
            }),
            p4,
            Some(BLUE),
        ),
    ];

    Ok(DemoNetwork {
        lanes: [a0, b0, a1, b1, a2, b2, a3, b3],
        connectors,
        agents,
        tally,
    })
}

fn seed_queue<R: Rng + ?Sized>(
    batch: &mut StagedBatch,
    lane: LaneId,
    request: &SpawnRequest,
    rng: &mut R,
) -> Result<Vec<AgentId>, BuildError> {
    seed_agents(
        batch,
        lane,
        DEMO_LANE_LENGTH,
        AGENTS_PER_SEEDED_LANE,
        &PlacementPolicy::QueueFromEnd,
        request.car,
        rng,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strada_arena::{ArenaConfig, NetworkArena};
    use strada_core::{ConnectorTemplates, JunctionArity, NetworkReader, TemplateId};

    fn request() -> SpawnRequest {
        SpawnRequest {
            connectors: ConnectorTemplates {
                dead_end: TemplateId(0),
                merge: TemplateId(1),
                triple: TemplateId(2),
            },
            car: TemplateId(3),
        }
    }

    fn committed() -> (NetworkArena, DemoNetwork) {
        let mut arena = NetworkArena::new(ArenaConfig::default()).unwrap();
        let mut batch = arena.begin_batch();
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let demo = build_demo_network(&request(), &mut batch, &mut rng).unwrap();
        arena.commit(batch).unwrap();
        (arena, demo)
    }

    #[test]
    fn counts_match_layout() {
        let (arena, demo) = committed();
        let snap = arena.snapshot();
        assert_eq!(snap.lane_count(), 8);
        assert_eq!(snap.connector_count(), 5);
        assert_eq!(snap.agent_count(), 4);
        assert_eq!(
            demo.tally,
            ArityTally {
                dead_ends: 3,
                merges: 1,
                triples: 1,
            }
        );
    }

    #[test]
    fn connector_variants_sit_at_expected_positions() {
        let (arena, demo) = committed();
        let snap = arena.snapshot();
        let expected = [
            (JunctionArity::DeadEnd, DEMO_POSITIONS[0], Some(RED)),
            (JunctionArity::Merge, DEMO_POSITIONS[1], None),
            (JunctionArity::Triple, DEMO_POSITIONS[2], None),
            (JunctionArity::DeadEnd, DEMO_POSITIONS[3], Some(GREEN)),
            (JunctionArity::DeadEnd, DEMO_POSITIONS[4], Some(BLUE)),
        ];
        for (id, (arity, position, tint)) in demo.connectors.iter().zip(expected) {
            let c = snap.connector(*id).unwrap();
            assert_eq!(c.arity(), arity);
            assert_eq!(c.position, position);
            assert_eq!(c.tint, tint);
        }
    }

    #[test]
    fn lane_geometry() {
        let (arena, demo) = committed();
        let snap = arena.snapshot();
        let a0 = snap.lane(demo.lanes[0]).unwrap();
        assert_eq!(a0.start_pos, Vec3::new(-5.0, 0.0, -0.5));
        assert_eq!(a0.end_pos, Vec3::new(0.0, 0.0, -0.5));
        let b3 = snap.lane(demo.lanes[7]).unwrap();
        assert_eq!(b3.start_pos, Vec3::new(4.5, 0.0, 5.0));
        assert_eq!(b3.end_pos, Vec3::new(4.5, 0.0, 0.0));
        assert!(snap.lanes().all(|(_, l)| l.length == DEMO_LANE_LENGTH));
    }

    #[test]
    fn agents_queue_on_a0_and_b3() {
        let (arena, demo) = committed();
        let snap = arena.snapshot();
        let on = |lane: LaneId| {
            snap.agents_on(lane)
                .map(|(_, a)| a.position_along_lane)
                .collect::<Vec<_>>()
        };
        assert_eq!(on(demo.lanes[0]), vec![10.0, 5.0]);
        assert_eq!(on(demo.lanes[7]), vec![10.0, 5.0]);
        assert_eq!(demo.agents.len(), 4);
        assert!(snap.agents().all(|(_, a)| a.template == TemplateId(3)));
    }

    #[test]
    fn dead_end_wiring_joins_lane_ends() {
        let (arena, _) = committed();
        let snap = arena.snapshot();
        for (_, c) in snap.connectors_of(JunctionArity::DeadEnd) {
            let ConnectorKind::DeadEnd(d) = c.kind else {
                unreachable!()
            };
            let lane_in = snap.lane(d.lane_in0).unwrap();
            let lane_out = snap.lane(d.lane_out0).unwrap();
            // The turnaround crosses from one side of the road to the other.
            assert_eq!(
                lane_in.end_pos.distance(lane_out.start_pos),
                2.0 * LANE_OFFSET
            );
        }
    }

    #[test]
    fn rebuild_is_bit_identical() {
        let (first, _) = committed();
        let (second, _) = committed();
        assert_eq!(first.owned_snapshot(), second.owned_snapshot());
    }
}
