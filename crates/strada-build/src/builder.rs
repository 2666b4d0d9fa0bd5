//! Lane-graph builder.
//!
//! Turns one [`Junction`] into a pair of opposing lanes per neighbour
//! segment plus one connector wiring them together. Everything is staged
//! into a [`StagedBatch`]; committed state is never touched here.
//!
//! # Lane order
//!
//! For segment `i` the builder stages lane-A (`start_point → end_point`)
//! followed by lane-B (`end_point → start_point`), so a junction's lanes
//! come out as `A0, B0, A1, B1, …`.
//!
//! # Wiring
//!
//! | Segments | Connector | Wiring |
//! |----------|-----------|--------|
//! | 1 | dead-end | `in0 = B0, out0 = A0` |
//! | 2 | merge | `in0 = B0, out0 = A0, in1 = A1, out1 = B1` |
//! | 3 | triple | as merge, plus `in2 = A2, out2 = B2`; flags `-1` |

use smallvec::SmallVec;
use strada_arena::StagedBatch;
use strada_core::{
    BuildError, Connector, ConnectorId, ConnectorKind, ConnectorTemplates, DeadEnd, Junction,
    JunctionArity, JunctionId, Lane, LaneId, Merge, SplineSegment, Triple,
    DIRECTION_UNDETERMINED,
};

/// What one junction contributed to a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuiltJunction {
    /// Staged lanes in `A0, B0, A1, B1, …` order.
    pub lanes: SmallVec<[LaneId; 6]>,
    /// The staged connector.
    pub connector: ConnectorId,
    /// Arity of the junction.
    pub arity: JunctionArity,
}

impl BuiltJunction {
    /// Forward lane (`start_point → end_point`) of segment `segment`.
    pub fn lane_a(&self, segment: usize) -> Option<LaneId> {
        self.lanes.get(segment * 2).copied()
    }

    /// Reverse lane (`end_point → start_point`) of segment `segment`.
    pub fn lane_b(&self, segment: usize) -> Option<LaneId> {
        self.lanes.get(segment * 2 + 1).copied()
    }
}

/// Check a junction without staging anything.
///
/// Returns its arity if every neighbour segment is usable.
pub fn validate_junction(id: JunctionId, junction: &Junction) -> Result<JunctionArity, BuildError> {
    let count = junction.neighbor_splines.len();
    let arity = JunctionArity::from_neighbor_count(count).ok_or(BuildError::UnsupportedArity {
        junction: id,
        count,
    })?;
    for (segment, spline) in junction.neighbor_splines.iter().enumerate() {
        spline
            .validate()
            .map_err(|reason| BuildError::MalformedSegment {
                junction: id,
                segment,
                reason,
            })?;
    }
    Ok(arity)
}

/// Stage the lanes and connector for one junction.
///
/// The junction is validated first; on error nothing has been staged for
/// it. The connector sits at `junction.position` and uses the template
/// matching the junction's arity.
pub fn build_junction(
    id: JunctionId,
    junction: &Junction,
    templates: &ConnectorTemplates,
    batch: &mut StagedBatch,
) -> Result<BuiltJunction, BuildError> {
    let arity = validate_junction(id, junction)?;

    let lanes: SmallVec<[LaneId; 6]> = junction
        .neighbor_splines
        .iter()
        .flat_map(|spline| {
            let [a, b] = lane_pair(spline);
            [a, b]
        })
        .map(|lane| batch.stage_lane(lane))
        .collect();

    let kind = wire(arity, &lanes);
    let template = match arity {
        JunctionArity::DeadEnd => templates.dead_end,
        JunctionArity::Merge => templates.merge,
        JunctionArity::Triple => templates.triple,
    };
    let connector = batch.stage_connector(Connector::new(kind, junction.position, template));

    tracing::trace!(
        junction = %id,
        ?arity,
        lanes = lanes.len(),
        connector = %connector,
        "junction staged"
    );

    Ok(BuiltJunction {
        lanes,
        connector,
        arity,
    })
}

/// The two opposing lanes over one segment: `[A, B]`.
pub fn lane_pair(spline: &SplineSegment) -> [Lane; 2] {
    let a = Lane::new(spline.start_point, spline.end_point, spline.measured_length);
    let b = a.reversed();
    [a, b]
}

fn wire(arity: JunctionArity, lanes: &[LaneId]) -> ConnectorKind {
    // Callers stage exactly `arity.lane_count()` lanes before wiring.
    debug_assert_eq!(lanes.len(), arity.lane_count());
    match arity {
        JunctionArity::DeadEnd => ConnectorKind::DeadEnd(DeadEnd {
            lane_in0: lanes[1],
            lane_out0: lanes[0],
        }),
        JunctionArity::Merge => ConnectorKind::Merge(Merge {
            lane_in0: lanes[1],
            lane_out0: lanes[0],
            lane_in1: lanes[2],
            lane_out1: lanes[3],
        }),
        JunctionArity::Triple => ConnectorKind::Triple(Triple {
            lane_in0: lanes[1],
            lane_out0: lanes[0],
            lane_in1: lanes[2],
            lane_out1: lanes[3],
            lane_in2: lanes[4],
            lane_out2: lanes[5],
            lane0_direction: DIRECTION_UNDETERMINED,
            lane1_direction: DIRECTION_UNDETERMINED,
            lane2_direction: DIRECTION_UNDETERMINED,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use strada_arena::{ArenaConfig, NetworkArena};
    use strada_core::{NetworkReader, TemplateId};

    fn templates() -> ConnectorTemplates {
        ConnectorTemplates {
            dead_end: TemplateId(10),
            merge: TemplateId(11),
            triple: TemplateId(12),
        }
    }

    fn junction(n: usize) -> Junction {
        let segments = (0..n).map(|i| {
            let dir = Vec3::new(i as f32, 0.0, 1.0);
            SplineSegment::new(Vec3::ZERO, dir * 10.0, 10.0 + i as f32)
        });
        Junction::new(Vec3::new(1.0, 2.0, 3.0), segments)
    }

    fn arena() -> NetworkArena {
        NetworkArena::new(ArenaConfig::default()).unwrap()
    }

    #[test]
    fn dead_end_wires_b0_into_a0() {
        let arena = arena();
        let mut batch = arena.begin_batch();
        let built = build_junction(JunctionId(0), &junction(1), &templates(), &mut batch).unwrap();

        assert_eq!(built.arity, JunctionArity::DeadEnd);
        assert_eq!(built.lanes.as_slice(), &[LaneId(0), LaneId(1)]);
        assert_eq!(built.lane_a(0), Some(LaneId(0)));
        assert_eq!(built.lane_b(0), Some(LaneId(1)));
        assert_eq!(batch.lane_count(), 2);
        assert_eq!(batch.connector_count(), 1);

        let mut arena = arena;
        arena.commit(batch).unwrap();
        let snap = arena.snapshot();
        let connector = snap.connector(built.connector).unwrap();
        assert_eq!(connector.template, TemplateId(10));
        assert_eq!(connector.position, Vec3::new(1.0, 2.0, 3.0));
        match connector.kind {
            ConnectorKind::DeadEnd(d) => {
                assert_eq!(d.lane_in0, LaneId(1));
                assert_eq!(d.lane_out0, LaneId(0));
                let lane_in = snap.lane(d.lane_in0).unwrap();
                let lane_out = snap.lane(d.lane_out0).unwrap();
                assert_eq!(lane_in.end_pos, lane_out.start_pos);
            }
            other => panic!("expected dead-end, got {other:?}"),
        }
    }

    #[test]
    fn merge_wiring() {
        let arena = arena();
        let mut batch = arena.begin_batch();
        let built = build_junction(JunctionId(0), &junction(2), &templates(), &mut batch).unwrap();
        assert_eq!(built.lanes.len(), 4);
        let connector = match &batch.commands()[4] {
            strada_core::BuildCommand::CreateConnector { connector, .. } => connector.clone(),
            other => panic!("expected connector command, got {other:?}"),
        };
        assert_eq!(connector.template, TemplateId(11));
        assert_eq!(
            connector.kind,
            ConnectorKind::Merge(Merge {
                lane_in0: LaneId(1),
                lane_out0: LaneId(0),
                lane_in1: LaneId(2),
                lane_out1: LaneId(3),
            })
        );
    }

    #[test]
    fn triple_flags_start_undetermined() {
        let arena = arena();
        let mut batch = arena.begin_batch();
        build_junction(JunctionId(0), &junction(3), &templates(), &mut batch).unwrap();
        let mut arena = arena;
        arena.commit(batch).unwrap();
        let snap = arena.snapshot();
        match snap.connector(ConnectorId(0)).unwrap().kind {
            ConnectorKind::Triple(t) => {
                assert_eq!(t.directions(), [-1, -1, -1]);
                assert_eq!((t.lane_in2, t.lane_out2), (LaneId(4), LaneId(5)));
            }
            other => panic!("expected triple, got {other:?}"),
        }
    }

    #[test]
    fn lanes_take_each_segments_own_length() {
        let arena = arena();
        let mut batch = arena.begin_batch();
        let built = build_junction(JunctionId(0), &junction(3), &templates(), &mut batch).unwrap();
        let lengths: Vec<f32> = built
            .lanes
            .iter()
            .map(|&id| batch.staged_lane(id).unwrap().length)
            .collect();
        assert_eq!(lengths, vec![10.0, 10.0, 11.0, 11.0, 12.0, 12.0]);
    }

    #[test]
    fn unsupported_arity_stages_nothing() {
        let arena = arena();
        for n in [0, 4] {
            let mut batch = arena.begin_batch();
            let err = build_junction(JunctionId(7), &junction(n), &templates(), &mut batch)
                .unwrap_err();
            assert_eq!(
                err,
                BuildError::UnsupportedArity {
                    junction: JunctionId(7),
                    count: n,
                }
            );
            assert!(batch.is_empty());
        }
    }

    #[test]
    fn malformed_later_segment_stages_nothing() {
        let arena = arena();
        let mut batch = arena.begin_batch();
        let mut j = junction(2);
        j.neighbor_splines[1].measured_length = f32::NAN;
        let err = build_junction(JunctionId(3), &j, &templates(), &mut batch).unwrap_err();
        assert!(matches!(
            err,
            BuildError::MalformedSegment {
                junction: JunctionId(3),
                segment: 1,
                ..
            }
        ));
        assert!(batch.is_empty());
    }

    #[test]
    fn zero_length_segment_is_accepted() {
        let arena = arena();
        let mut batch = arena.begin_batch();
        let j = Junction::new(Vec3::ZERO, [SplineSegment::new(Vec3::ONE, Vec3::ONE, 0.0)]);
        assert!(build_junction(JunctionId(0), &j, &templates(), &mut batch).is_ok());
    }

    #[test]
    fn lane_pair_reverses_geometry() {
        let seg = SplineSegment::straight(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
        let [a, b] = lane_pair(&seg);
        assert_eq!(a.start_pos, Vec3::ZERO);
        assert_eq!(a.end_pos, Vec3::new(0.0, 0.0, 4.0));
        assert!(b.is_reverse_of(&a));
        assert_eq!(a.length, 4.0);
    }
}
